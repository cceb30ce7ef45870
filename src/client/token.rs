//! Authorization-code token exchange.

// crates.io
use http::{Method, Request, header};
// self
use crate::{
	_prelude::*,
	auth::TokenResponse,
	client::{RestClient, common},
	error::ConfigError,
	http::{HttpTransport, TransportErrorMapper},
	obs::{self, CallKind, CallOutcome, CallSpan},
	params::RequestParams,
};

const TOKEN_USER_AGENT: &str = "oauth2-draft-v10";

impl<C, M> RestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Exchanges an authorization code for a bearer token at `token_url`.
	///
	/// Sends the `authorization_code` form grant carrying this client's credentials,
	/// merged with `extra_params` (extras win on conflict). Empty credentials fail
	/// fast with a [`ConfigError`] before any network attempt. On success the
	/// returned token is installed on the client, so subsequent calls authenticate
	/// without an explicit [`set_token`](RestClient::set_token).
	pub async fn exchange_code_for_token(
		&self,
		code: &str,
		token_url: &str,
		extra_params: &RequestParams,
	) -> Result<TokenResponse> {
		const KIND: CallKind = CallKind::TokenExchange;

		let span = CallSpan::new(KIND, "exchange_code_for_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				if self.credentials.client_key.is_empty() {
					return Err(ConfigError::MissingClientKey.into());
				}
				if self.credentials.client_secret.is_empty() {
					return Err(ConfigError::MissingClientSecret.into());
				}

				let url = Url::parse(token_url)
					.map_err(|source| ConfigError::InvalidTokenUrl { source })?;
				let form = {
					let mut map = BTreeMap::new();

					map.insert("code".to_owned(), code.to_owned());
					map.insert("grant_type".to_owned(), "authorization_code".to_owned());
					map.insert(
						"client_secret".to_owned(),
						self.credentials.client_secret.expose().to_owned(),
					);
					map.insert("client_id".to_owned(), self.credentials.client_key.clone());

					for (key, value) in extra_params.iter() {
						map.insert(key.to_owned(), value.to_owned());
					}

					map
				};
				let body = url::form_urlencoded::Serializer::new(String::new())
					.extend_pairs(&form)
					.finish();
				let request = Request::builder()
					.method(Method::POST)
					.uri(url.as_str())
					.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
					.header(header::CONTENT_LENGTH, body.len())
					.header(header::ACCEPT, "application/json")
					.header(header::USER_AGENT, TOKEN_USER_AGENT)
					.body(body.into_bytes())
					.map_err(ConfigError::from)?;
				let response = self.dispatch(KIND, request).await?;
				let token: TokenResponse =
					common::decode_json(response.status().as_u16(), response.body())?;

				self.set_token(token.access_token.expose());

				Ok(token)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}
}
