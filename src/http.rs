//! Transport primitives for authenticated REST exchanges.
//!
//! The module exposes [`HttpTransport`] alongside [`TransportErrorMapper`] and
//! [`ResponseMetadata`] so downstream crates can integrate custom HTTP clients
//! without losing the crate's error classification. Implementations execute one
//! buffered request/response exchange per call; status checks, retry hints, and
//! JSON decoding stay inside this crate.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use http::{HeaderMap, header::RETRY_AFTER};
use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, obs::CallKind};
#[cfg(feature = "reqwest")]
use crate::error::{ConfigError, TransportError};

/// HTTP request type consumed by [`HttpTransport`] implementations.
pub type HttpRequest = http::Request<Vec<u8>>;
/// HTTP response type produced by [`HttpTransport`] implementations.
pub type HttpResponse = http::Response<Vec<u8>>;
/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, T, E> =
	Pin<Box<dyn Future<Output = std::result::Result<T, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing the client's request/response
/// exchanges.
///
/// The trait is the crate's only dependency on an HTTP stack. Callers provide an
/// implementation (typically behind `Arc<T>` where `T: HttpTransport`) and every
/// client operation submits exactly one [`HttpRequest`] through it. Implementations
/// must be `Send + Sync + 'static` so they can be shared across client clones, and
/// the futures they return must be `Send` so the client's boxed call futures inherit
/// the same guarantee. Implementations hand back the complete buffered response;
/// streaming bodies are out of scope.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes one HTTP exchange, resolving to the buffered response.
	fn execute(
		&self,
		request: HttpRequest,
	) -> TransportFuture<'_, HttpResponse, Self::TransportError>;
}

/// Maps transport failures into client [`Error`] values.
///
/// Custom transports pair with a mapper so their native error type surfaces through
/// the crate's taxonomy instead of leaking into caller signatures.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an error emitted by the transport into a client error.
	fn map_transport_error(&self, call: CallKind, error: E) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, call: CallKind, err: ReqwestError) -> Error {
		// Call kind reserved for call-aware mappers.
		let _ = call;

		if err.is_builder() {
			return ConfigError::from(err).into();
		}

		TransportError::from(err).into()
	}
}

/// Captures metadata from a buffered HTTP response for downstream error mapping.
///
/// Additional metadata fields may be added in future releases, so downstream code
/// should construct values using field names instead of struct update syntax.
#[derive(Clone, Debug, Default)]
pub struct ResponseMetadata {
	/// HTTP status code returned by the endpoint, if available.
	pub status: Option<u16>,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}
impl ResponseMetadata {
	/// Reads status and retry hints off a buffered response.
	pub fn capture(response: &HttpResponse) -> Self {
		Self {
			status: Some(response.status().as_u16()),
			retry_after: parse_retry_after(response.headers()),
		}
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Token endpoints return results directly instead of delegating to another URI, so
/// configure any custom [`ReqwestClient`] passed in here to disable redirect
/// following.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(
		&self,
		request: HttpRequest,
	) -> TransportFuture<'_, HttpResponse, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
