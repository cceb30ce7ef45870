// crates.io
use httpmock::prelude::*;
// self
use oauth2_rest::{
	_preludet::*,
	error::{ConfigError, DecodeError},
	params::RequestParams,
};

const CLIENT_KEY: &str = "client-exchange";
const CLIENT_SECRET: &str = "secret-exchange";

fn build_client(server: &MockServer) -> ReqwestTestClient {
	build_reqwest_test_client(CLIENT_KEY, CLIENT_SECRET, &server.base_url())
}

#[tokio::test]
async fn exchange_sends_form_grant_and_installs_token() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/token")
				.header("content-type", "application/x-www-form-urlencoded")
				.header("accept", "application/json")
				.header("user-agent", "oauth2-draft-v10")
				.body(format!(
					"client_id={CLIENT_KEY}&client_secret={CLIENT_SECRET}\
					&code=auth-code-1&grant_type=authorization_code"
				));
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"issued-token\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let token = client
		.exchange_code_for_token("auth-code-1", &server.url("/token"), &RequestParams::new())
		.await
		.expect("Token exchange should succeed against the mock endpoint.");

	assert_eq!(token.access_token.expose(), "issued-token");
	assert_eq!(token.token_type.as_deref(), Some("bearer"));
	assert_eq!(token.expires_in, Some(3600));
	// A successful exchange installs the token on the client.
	assert_eq!(
		client.access_token().map(|token| token.expose().to_owned()),
		Some("issued-token".to_owned()),
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn exchange_extra_params_override_grant_defaults() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token").body(format!(
				"client_id={CLIENT_KEY}&client_secret={CLIENT_SECRET}\
				&code=auth-code-2&grant_type=refresh_token&redirect_uri=urn%3Aapp"
			));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"override-token\"}");
		})
		.await;
	let extras =
		RequestParams::from([("grant_type", "refresh_token"), ("redirect_uri", "urn:app")]);
	let token = client
		.exchange_code_for_token("auth-code-2", &server.url("/token"), &extras)
		.await
		.expect("Token exchange with overriding extras should succeed.");

	assert_eq!(token.access_token.expose(), "override-token");

	mock.assert_async().await;
}

#[tokio::test]
async fn exchange_fails_fast_on_empty_client_secret() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(CLIENT_KEY, "", &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200);
		})
		.await;
	let err = client
		.exchange_code_for_token("auth-code-3", &server.url("/token"), &RequestParams::new())
		.await
		.expect_err("Empty client secret should fail before any network attempt.");

	assert!(matches!(err, Error::Config(ConfigError::MissingClientSecret)));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn exchange_fails_fast_on_empty_client_key() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client("", CLIENT_SECRET, &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200);
		})
		.await;
	let err = client
		.exchange_code_for_token("auth-code-4", &server.url("/token"), &RequestParams::new())
		.await
		.expect_err("Empty client key should fail before any network attempt.");

	assert!(matches!(err, Error::Config(ConfigError::MissingClientKey)));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn exchange_surfaces_non_success_status_as_error() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\"}");
		})
		.await;
	let err = client
		.exchange_code_for_token("expired-code", &server.url("/token"), &RequestParams::new())
		.await
		.expect_err("Rejected grants must surface through the error channel.");

	match err {
		Error::Status { status, body_preview, .. } => {
			assert_eq!(status, 400);
			assert!(body_preview.contains("invalid_grant"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	// A failed exchange never installs a token.
	assert!(client.access_token().is_none());

	mock.assert_async().await;
}

#[tokio::test]
async fn exchange_surfaces_malformed_json_as_decode_error() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200)
				.header("content-type", "text/html")
				.body("<html>totally not json</html>");
		})
		.await;
	let err = client
		.exchange_code_for_token("auth-code-5", &server.url("/token"), &RequestParams::new())
		.await
		.expect_err("Non-JSON bodies must fail decoding.");

	assert!(matches!(err, Error::Decode(DecodeError::Json { status: Some(200), .. })));

	mock.assert_async().await;
}

#[tokio::test]
async fn exchange_rejects_unparseable_token_url() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let err = client
		.exchange_code_for_token("auth-code-6", "not a url", &RequestParams::new())
		.await
		.expect_err("Malformed token URLs should be rejected before dispatch.");

	assert!(matches!(err, Error::Config(ConfigError::InvalidTokenUrl { .. })));
}
