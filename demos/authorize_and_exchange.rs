//! Walks through the authorization-code handshake: build the consent URL, then exchange the
//! code the redirect handler received for a bearer token.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use oauth2_rest::{client::RestClient, params::RequestParams};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let client = RestClient::new("demo-client", "demo-secret", server.base_url());
	let consent_url = client.authorization_url(
		&server.url("/authorize"),
		&RequestParams::from([
			("redirect_uri", "https://app.example.com/oauth/callback"),
			("scope", "profile email"),
			("state", "xyzzy"),
		]),
	)?;

	println!("Send your user to {consent_url}.");

	// Simulate the redirect handler receiving `?code=...&state=xyzzy`.
	let code = "demo-authorization-code";
	let token =
		client.exchange_code_for_token(code, &server.url("/token"), &RequestParams::new()).await?;

	println!("Bearer token issued: {}.", token.access_token.expose());
	println!("Expires in: {:?} seconds.", token.expires_in);

	// The exchange installed the token, so authenticated calls work from here on.
	assert!(client.access_token().is_some());

	token_mock.assert_async().await;

	Ok(())
}
