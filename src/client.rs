//! Authenticated REST client over a pluggable HTTP transport.

mod authorize;
mod common;
mod resource;
mod token;

// self
use crate::{
	_prelude::*,
	auth::{ClientCredentials, Secret},
	http::{HttpTransport, TransportErrorMapper},
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestRestClient = RestClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// OAuth 2.0 REST client bound to one provider's base URL.
///
/// The client owns the HTTP transport, the error mapper, and the client credential
/// pair, and keeps two mutable fields (base URL + bearer token) behind a single
/// lock. Every operation snapshots both fields at call start, so an in-flight call
/// never observes a concurrent [`set_token`](Self::set_token) or
/// [`set_url`](Self::set_url). Cloning yields another handle to the same mutable
/// state.
pub struct RestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Client credential pair used for authorization URLs and token exchanges.
	pub credentials: ClientCredentials,
	state: Arc<RwLock<ClientState>>,
}
impl<C, M> RestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		client_key: impl Into<String>,
		client_secret: impl Into<String>,
		base_url: impl Into<String>,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			credentials: ClientCredentials::new(client_key, client_secret),
			state: Arc::new(RwLock::new(ClientState {
				base_url: base_url.into(),
				access_token: None,
			})),
		}
	}

	/// Sets or replaces the bearer token during construction.
	pub fn with_token(self, token: impl Into<String>) -> Self {
		self.set_token(token);

		self
	}

	/// Replaces the bearer token used by authenticated calls; returns `&Self` for
	/// chaining. In-flight calls keep the token they snapshotted at call start.
	pub fn set_token(&self, token: impl Into<String>) -> &Self {
		self.state.write().access_token = Some(Secret::new(token));

		self
	}

	/// Replaces the base API URL; returns `&Self` for chaining. In-flight calls keep
	/// the URL they snapshotted at call start.
	///
	/// The URL is stored as given; an unparseable value surfaces as a
	/// [`ConfigError`](crate::error::ConfigError) when the next request is built.
	pub fn set_url(&self, url: impl Into<String>) -> &Self {
		self.state.write().base_url = url.into();

		self
	}

	/// Returns the current bearer token, if one is set.
	pub fn access_token(&self) -> Option<Secret> {
		self.state.read().access_token.clone()
	}

	/// Returns the current base API URL.
	pub fn base_url(&self) -> String {
		self.state.read().base_url.clone()
	}

	pub(crate) fn snapshot(&self) -> ClientState {
		self.state.read().clone()
	}
}
#[cfg(feature = "reqwest")]
impl RestClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client backed by the crate's default reqwest transport.
	///
	/// Use [`RestClient::with_token`] or [`RestClient::set_token`] to restore a
	/// previously issued bearer token, or exchange an authorization code to obtain
	/// one.
	pub fn new(
		client_key: impl Into<String>,
		client_secret: impl Into<String>,
		base_url: impl Into<String>,
	) -> Self {
		Self::with_http_client(
			client_key,
			client_secret,
			base_url,
			ReqwestHttpClient::default(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}
impl<C, M> Clone for RestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			transport_mapper: Arc::clone(&self.transport_mapper),
			credentials: self.credentials.clone(),
			state: Arc::clone(&self.state),
		}
	}
}
impl<C, M> Debug for RestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let state = self.state.read();

		f.debug_struct("RestClient")
			.field("credentials", &self.credentials)
			.field("base_url", &state.base_url)
			.field("access_token_set", &state.access_token.is_some())
			.finish()
	}
}

/// Snapshot of the client's mutable endpoint + token state.
#[derive(Clone)]
pub(crate) struct ClientState {
	pub(crate) base_url: String,
	pub(crate) access_token: Option<Secret>,
}
