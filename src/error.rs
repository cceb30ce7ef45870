//! Client-level error types shared across requests and transports.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Endpoint answered with a non-success HTTP status.
	#[error("Endpoint responded with HTTP {status}: {body_preview}.")]
	Status {
		/// HTTP status code of the response.
		status: u16,
		/// Truncated response body, for diagnostics.
		body_preview: String,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
}

/// Configuration and validation failures raised before any network attempt.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Authenticated call attempted with no access token set.
	#[error("No access token is set; call set_token or exchange a code first.")]
	MissingAccessToken,
	/// Token exchange attempted with an empty client key.
	#[error("Client key is empty.")]
	MissingClientKey,
	/// Token exchange attempted with an empty client secret.
	#[error("Client secret is empty.")]
	MissingClientSecret,

	/// Authorization base URL cannot be parsed.
	#[error("Authorization base URL is invalid.")]
	InvalidAuthorizeUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Token endpoint URL cannot be parsed.
	#[error("Token endpoint URL is invalid.")]
	InvalidTokenUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Configured base URL plus request path cannot be parsed.
	#[error("Request URL derived from the base URL is invalid.")]
	InvalidRequestUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying HTTP client timed out waiting for the endpoint.
	#[error("Request to the endpoint timed out.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}

/// Decoding failures for response bodies that arrived intact.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Endpoint responded with malformed JSON or JSON of an unexpected shape.
	#[error("Endpoint returned malformed JSON.")]
	Json {
		/// Structured parsing failure, with the path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code of the response carrying the body.
		status: Option<u16>,
	},
}
