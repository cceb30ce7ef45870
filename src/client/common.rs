//! Shared dispatch and decoding helpers for client operations.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	client::RestClient,
	error::DecodeError,
	http::{HttpRequest, HttpResponse, HttpTransport, ResponseMetadata, TransportErrorMapper},
	obs::CallKind,
};

const BODY_PREVIEW_LIMIT: usize = 256;

impl<C, M> RestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Sends one request through the transport and enforces the success-status
	/// contract: non-2xx responses surface as [`Error::Status`], never as values.
	pub(crate) async fn dispatch(
		&self,
		call: CallKind,
		request: HttpRequest,
	) -> Result<HttpResponse> {
		let response = self
			.http_client
			.execute(request)
			.await
			.map_err(|err| self.transport_mapper.map_transport_error(call, err))?;

		if response.status().is_success() {
			return Ok(response);
		}

		let meta = ResponseMetadata::capture(&response);

		Err(Error::Status {
			status: response.status().as_u16(),
			body_preview: truncate_preview(String::from_utf8_lossy(response.body()).into_owned()),
			retry_after: meta.retry_after,
		})
	}
}

/// Decodes a JSON response body into `T`, attaching the originating status on failure.
pub(crate) fn decode_json<T>(status: u16, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DecodeError::Json { source, status: Some(status) }.into())
}

fn truncate_preview(body: String) -> String {
	if body.chars().count() <= BODY_PREVIEW_LIMIT {
		return body;
	}

	let mut buf = String::new();

	for (idx, ch) in body.chars().enumerate() {
		if idx >= BODY_PREVIEW_LIMIT {
			buf.push('…');

			break;
		}
		buf.push(ch);
	}

	buf
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn decode_json_parses_structured_bodies() {
		let value: serde_json::Value =
			decode_json(200, br#"{"a":1}"#).expect("Well-formed JSON should decode.");

		assert_eq!(value, serde_json::json!({ "a": 1 }));
	}

	#[test]
	fn decode_json_attaches_status_on_failure() {
		let err = decode_json::<serde_json::Value>(502, b"<html>bad gateway</html>")
			.expect_err("HTML body should fail JSON decoding.");

		assert!(matches!(
			err,
			Error::Decode(DecodeError::Json { status: Some(502), .. })
		));
	}

	#[test]
	fn truncate_preview_caps_long_bodies() {
		let long = "x".repeat(BODY_PREVIEW_LIMIT + 10);
		let preview = truncate_preview(long);

		assert_eq!(preview.chars().count(), BODY_PREVIEW_LIMIT + 1);
		assert!(preview.ends_with('…'));

		let short = truncate_preview("short".into());

		assert_eq!(short, "short");
	}
}
