//! Rust's no-fuss OAuth 2.0 REST client—build authorization URLs, swap codes for bearer
//! tokens, and fire authenticated JSON calls through one pluggable async transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
#[cfg(feature = "blocking")] pub mod blocking;
pub mod client;
pub mod error;
pub mod http;
pub mod obs;
pub mod params;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::RestClient,
		http::{ReqwestHttpClient, ReqwestTransportErrorMapper},
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = RestClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`RestClient`] backed by the insecure reqwest transport used across
	/// integration tests.
	pub fn build_reqwest_test_client(
		client_key: &str,
		client_secret: &str,
		base_url: &str,
	) -> ReqwestTestClient {
		RestClient::with_http_client(
			client_key,
			client_secret,
			base_url,
			test_reqwest_http_client(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, oauth2_rest as _, tokio as _};
