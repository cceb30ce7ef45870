//! Authorization URL construction.

// self
use crate::{
	_prelude::*,
	client::RestClient,
	error::ConfigError,
	http::{HttpTransport, TransportErrorMapper},
	params::RequestParams,
};

impl<C, M> RestClient<C, M>
where
	C: ?Sized + HttpTransport,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Builds the URL end-users visit to start the authorization-code handshake.
	///
	/// Merges the defaults `{response_type: "code", client_id: <client key>}` with
	/// `extra_params` (extras win on conflict), discards any query already present
	/// on `base_auth_url`, and writes the merged set as the new query in key order.
	/// The helper is pure: it never touches the network or the client's mutable
	/// state.
	pub fn authorization_url(
		&self,
		base_auth_url: &str,
		extra_params: &RequestParams,
	) -> Result<Url> {
		let mut url = Url::parse(base_auth_url)
			.map_err(|source| ConfigError::InvalidAuthorizeUrl { source })?;
		let query = {
			let mut map = BTreeMap::new();

			map.insert("response_type".to_owned(), "code".to_owned());
			map.insert("client_id".to_owned(), self.credentials.client_key.clone());

			for (key, value) in extra_params.iter() {
				map.insert(key.to_owned(), value.to_owned());
			}

			map
		};
		let mut pairs = url.query_pairs_mut();

		pairs.clear();

		for (key, value) in &query {
			pairs.append_pair(key, value);
		}

		drop(pairs);

		Ok(url)
	}
}
