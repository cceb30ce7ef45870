//! Client credential material with a redacting secret wrapper.

// self
use crate::_prelude::*;

/// Redacted secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret(String);
impl Secret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when the wrapped value is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for Secret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// OAuth 2.0 client identifier/secret pair issued by the API provider.
///
/// Immutable once constructed. Emptiness is not rejected here; the token exchange
/// fails fast before any network attempt instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCredentials {
	/// Public client identifier sent as `client_id`.
	pub client_key: String,
	/// Confidential client secret sent on token exchanges.
	pub client_secret: Secret,
}
impl ClientCredentials {
	/// Creates a credential pair from raw strings.
	pub fn new(client_key: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self { client_key: client_key.into(), client_secret: Secret::new(client_secret) }
	}
}
