//! Token endpoint response model.

// self
use crate::{_prelude::*, auth::credentials::Secret};

/// Parsed token endpoint response.
///
/// Only `access_token` is required; the remaining RFC 6749 fields are
/// provider-dependent. Unknown members are preserved in [`extra`](Self::extra) so
/// provider-specific additions stay accessible without another decoding pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Bearer token secret; callers must avoid logging it.
	pub access_token: Secret,
	/// Token type reported by the provider, normally `bearer`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_type: Option<String>,
	/// Relative lifetime in seconds, when the provider reports one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expires_in: Option<u64>,
	/// Refresh token secret, if the provider issued one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<Secret>,
	/// Scope string granted by the provider.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// Provider-specific members outside the RFC 6749 core set.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}
impl TokenResponse {
	/// Computes the expiry instant relative to `issued_at`, when `expires_in` is known.
	pub fn expires_at(&self, issued_at: OffsetDateTime) -> Option<OffsetDateTime> {
		self.expires_in
			.map(|secs| issued_at + Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)))
	}
}
