//! Blocking facade that drives client calls on a private current-thread runtime.

// crates.io
use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};
// self
use crate::{
	_prelude::*,
	auth::TokenResponse,
	client::RestClient,
	error::TransportError,
	http::{HttpTransport, TransportErrorMapper},
	params::RequestParams,
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Blocking client specialized for the crate's default reqwest transport stack.
pub type ReqwestBlockingRestClient =
	BlockingRestClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Blocking wrapper around [`RestClient`] for synchronous callers.
///
/// Each network call drives the async operation to completion on a dedicated
/// current-thread runtime owned by this wrapper, parking the calling thread until
/// the response resolves. Must not be used from inside an async context;
/// `Runtime::block_on` panics there.
pub struct BlockingRestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	client: RestClient<C, M>,
	runtime: Runtime,
}
impl<C, M> BlockingRestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Wraps an existing async client with a fresh current-thread runtime.
	pub fn wrap(client: RestClient<C, M>) -> Result<Self> {
		let runtime =
			Builder::new_current_thread().enable_all().build().map_err(TransportError::from)?;

		Ok(Self { client, runtime })
	}

	/// Returns the wrapped async client.
	pub fn client(&self) -> &RestClient<C, M> {
		&self.client
	}

	/// See [`RestClient::set_token`].
	pub fn set_token(&self, token: impl Into<String>) -> &Self {
		self.client.set_token(token);

		self
	}

	/// See [`RestClient::set_url`].
	pub fn set_url(&self, url: impl Into<String>) -> &Self {
		self.client.set_url(url);

		self
	}

	/// See [`RestClient::authorization_url`]; pure, so no runtime hop is involved.
	pub fn authorization_url(
		&self,
		base_auth_url: &str,
		extra_params: &RequestParams,
	) -> Result<Url> {
		self.client.authorization_url(base_auth_url, extra_params)
	}

	/// Blocking form of [`RestClient::exchange_code_for_token`].
	pub fn exchange_code_for_token(
		&self,
		code: &str,
		token_url: &str,
		extra_params: &RequestParams,
	) -> Result<TokenResponse> {
		self.runtime.block_on(self.client.exchange_code_for_token(code, token_url, extra_params))
	}

	/// Blocking form of [`RestClient::get`].
	pub fn get<T>(&self, path: &str, params: &RequestParams) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.runtime.block_on(self.client.get(path, params))
	}

	/// Blocking form of [`RestClient::post`].
	pub fn post<T>(&self, path: &str, params: &RequestParams) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.runtime.block_on(self.client.post(path, params))
	}
}
#[cfg(feature = "reqwest")]
impl BlockingRestClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a blocking client backed by the crate's default reqwest transport.
	pub fn new(
		client_key: impl Into<String>,
		client_secret: impl Into<String>,
		base_url: impl Into<String>,
	) -> Result<Self> {
		Self::wrap(RestClient::new(client_key, client_secret, base_url))
	}
}
impl<C, M> Debug for BlockingRestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BlockingRestClient").field("client", &self.client).finish()
	}
}
