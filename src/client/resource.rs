//! Authenticated GET/POST resource calls.

// crates.io
use http::{Method, Request, header};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	client::{RestClient, common},
	error::ConfigError,
	http::{HttpTransport, TransportErrorMapper},
	obs::{self, CallKind, CallOutcome, CallSpan},
	params::RequestParams,
};

impl<C, M> RestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Issues an authenticated GET against `path` under the configured base URL and
	/// decodes the JSON response into `T`.
	///
	/// `params` is sent as the query string. The path is normalized first: one
	/// leading `/` is dropped, and a trailing `/` is appended unless the path
	/// already ends with one or contains a `.` anywhere. The dot check is a
	/// file-extension heuristic, so dotted segments such as `v1.2/items` also
	/// suppress the trailing slash.
	///
	/// Fails fast with [`ConfigError::MissingAccessToken`] before any network
	/// attempt when no bearer token is set.
	pub async fn get<T>(&self, path: &str, params: &RequestParams) -> Result<T>
	where
		T: DeserializeOwned,
	{
		const KIND: CallKind = CallKind::ResourceGet;

		let span = CallSpan::new(KIND, "get");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.resource_call(KIND, Method::GET, path, params)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Issues an authenticated POST against `path` under the configured base URL and
	/// decodes the JSON response into `T`.
	///
	/// `params` is serialized as the JSON request body. Path normalization and the
	/// fail-fast token requirement match [`get`](RestClient::get), including the dot
	/// heuristic rough edge.
	pub async fn post<T>(&self, path: &str, params: &RequestParams) -> Result<T>
	where
		T: DeserializeOwned,
	{
		const KIND: CallKind = CallKind::ResourcePost;

		let span = CallSpan::new(KIND, "post");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.resource_call(KIND, Method::POST, path, params)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	async fn resource_call<T>(
		&self,
		call: CallKind,
		method: Method,
		path: &str,
		params: &RequestParams,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let state = self.snapshot();
		let token = state.access_token.ok_or(ConfigError::MissingAccessToken)?;
		let path = normalize_path(path);
		let mut url = Url::parse(&format!("{}/{path}", state.base_url))
			.map_err(|source| ConfigError::InvalidRequestUrl { source })?;

		if method == Method::GET && !params.is_empty() {
			let mut pairs = url.query_pairs_mut();

			for (key, value) in params.iter() {
				pairs.append_pair(key, value);
			}

			drop(pairs);
		}

		let body = if method == Method::POST {
			params.to_json().to_string().into_bytes()
		} else {
			Vec::new()
		};
		let request = Request::builder()
			.method(method)
			.uri(url.as_str())
			.header(header::AUTHORIZATION, format!("Bearer {}", token.expose()))
			.header(header::CONTENT_TYPE, "application/json")
			.body(body)
			.map_err(ConfigError::from)?;
		let response = self.dispatch(call, request).await?;

		common::decode_json(response.status().as_u16(), response.body())
	}
}

fn normalize_path(path: &str) -> String {
	let trimmed = path.strip_prefix('/').unwrap_or(path);

	if !trimmed.contains('.') && !trimmed.ends_with('/') {
		return format!("{trimmed}/");
	}

	trimmed.to_owned()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn normalize_path_appends_missing_trailing_slash() {
		assert_eq!(normalize_path("foo"), "foo/");
		assert_eq!(normalize_path("/foo"), "foo/");
		assert_eq!(normalize_path("foo/"), "foo/");
		assert_eq!(normalize_path("nested/resource"), "nested/resource/");
	}

	#[test]
	fn normalize_path_leaves_dotted_paths_alone() {
		assert_eq!(normalize_path("foo.json"), "foo.json");
		// The dot check is a file-extension heuristic; dotted version segments
		// suppress the slash as well.
		assert_eq!(normalize_path("v1.2/items"), "v1.2/items");
	}

	#[test]
	fn normalize_path_strips_one_leading_slash() {
		assert_eq!(normalize_path("//foo"), "/foo/");
		assert_eq!(normalize_path(""), "/");
	}
}
