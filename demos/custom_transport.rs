//! Demonstrates plugging a custom HTTP transport and error mapper into the client.
//!
//! 1. Implement [`HttpTransport`] for the transport; `execute` resolves one buffered
//!    request/response exchange.
//! 2. Provide a [`TransportErrorMapper`] that lifts the transport's native error type into the
//!    client's [`Error`] taxonomy.
//! 3. Pass both to [`RestClient::with_http_client`].

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use color_eyre::Result;
use serde_json::Value;
// self
use oauth2_rest::{
	client::RestClient,
	error::{Error, TransportError},
	http::{HttpRequest, HttpResponse, HttpTransport, TransportErrorMapper, TransportFuture},
	obs::CallKind,
	params::RequestParams,
};

#[derive(Debug)]
enum MockTransportError {
	DnsFailure { host: &'static str },
}
impl Display for MockTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::DnsFailure { host } => write!(f, "DNS lookup failed for {host}."),
		}
	}
}
impl StdError for MockTransportError {}

/// Transport that answers every request from a canned response, or fails with a
/// canned transport error.
struct MockHttpClient {
	failure: Option<fn() -> MockTransportError>,
}
impl MockHttpClient {
	fn healthy() -> Self {
		Self { failure: None }
	}

	fn failing(failure: fn() -> MockTransportError) -> Self {
		Self { failure: Some(failure) }
	}
}
impl HttpTransport for MockHttpClient {
	type TransportError = MockTransportError;

	fn execute(
		&self,
		_request: HttpRequest,
	) -> TransportFuture<'_, HttpResponse, Self::TransportError> {
		Box::pin(async move {
			if let Some(failure) = self.failure {
				return Err(failure());
			}

			Ok(HttpResponse::new(b"{\"ok\":true}".to_vec()))
		})
	}
}

struct MockTransportErrorMapper;
impl TransportErrorMapper<MockTransportError> for MockTransportErrorMapper {
	fn map_transport_error(&self, call: CallKind, err: MockTransportError) -> Error {
		println!("Mapping a transport failure observed during a {call} call.");

		TransportError::network(err).into()
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mapper = Arc::new(MockTransportErrorMapper);
	let client: RestClient<MockHttpClient, MockTransportErrorMapper> =
		RestClient::with_http_client(
			"demo-client",
			"demo-secret",
			"https://api.example.com",
			MockHttpClient::healthy(),
			Arc::clone(&mapper),
		)
		.with_token("demo-token");
	let body: Value = client.get("status", &RequestParams::new()).await?;

	println!("Healthy transport answered: {body}.");

	let failing_client: RestClient<MockHttpClient, MockTransportErrorMapper> =
		RestClient::with_http_client(
			"demo-client",
			"demo-secret",
			"https://api.example.com",
			MockHttpClient::failing(|| MockTransportError::DnsFailure { host: "api.example.com" }),
			mapper,
		)
		.with_token("demo-token");
	let err = failing_client
		.get::<Value>("status", &RequestParams::new())
		.await
		.expect_err("The failing transport should surface an error.");

	println!("Failing transport surfaced: {err}.");

	Ok(())
}
