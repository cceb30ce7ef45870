#![cfg(feature = "blocking")]

// crates.io
use httpmock::prelude::*;
use serde_json::{Value, json};
// self
use oauth2_rest::{
	_preludet::*,
	blocking::{BlockingRestClient, ReqwestBlockingRestClient},
	error::ConfigError,
	params::RequestParams,
};

const CLIENT_KEY: &str = "client-blocking";
const CLIENT_SECRET: &str = "secret-blocking";

fn build_blocking_client(server: &MockServer) -> ReqwestBlockingRestClient {
	BlockingRestClient::wrap(build_reqwest_test_client(
		CLIENT_KEY,
		CLIENT_SECRET,
		&server.base_url(),
	))
	.expect("Blocking wrapper should build its runtime.")
}

#[test]
fn blocking_exchange_then_get_round_trips() {
	let server = MockServer::start();
	let client = build_blocking_client(&server);
	let token_mock = server.mock(|when, then| {
		when.method(POST).path("/token");
		then.status(200)
			.header("content-type", "application/json")
			.body("{\"access_token\":\"blocking-token\",\"token_type\":\"bearer\"}");
	});
	let get_mock = server.mock(|when, then| {
		when.method(GET).path("/items/").header("authorization", "Bearer blocking-token");
		then.status(200).header("content-type", "application/json").body("{\"a\":1}");
	});
	let token = client
		.exchange_code_for_token("blocking-code", &server.url("/token"), &RequestParams::new())
		.expect("Blocking token exchange should succeed.");

	assert_eq!(token.access_token.expose(), "blocking-token");

	let body: Value =
		client.get("items", &RequestParams::new()).expect("Blocking GET should succeed.");

	assert_eq!(body, json!({ "a": 1 }));

	token_mock.assert();
	get_mock.assert();
}

#[test]
fn blocking_calls_fail_fast_without_token() {
	let server = MockServer::start();
	let client = build_blocking_client(&server);
	let mock = server.mock(|when, then| {
		when.method(GET).path("/items/");
		then.status(200);
	});
	let err = client
		.get::<Value>("items", &RequestParams::new())
		.expect_err("Blocking GET without a token should fail before any network attempt.");

	assert!(matches!(err, Error::Config(ConfigError::MissingAccessToken)));

	mock.assert_calls(0);
}

#[test]
fn blocking_authorization_url_is_pure() {
	let server = MockServer::start();
	let client = build_blocking_client(&server);
	let url = client
		.authorization_url("https://provider.example.com/authorize", &RequestParams::new())
		.expect("Blocking authorization URL should build.");

	assert_eq!(
		url.as_str(),
		format!("https://provider.example.com/authorize?client_id={CLIENT_KEY}&response_type=code"),
	);
}

#[test]
fn blocking_setters_chain() {
	let server = MockServer::start();
	let client = build_blocking_client(&server);
	let mock = server.mock(|when, then| {
		when.method(POST).path("/chained/").header("authorization", "Bearer chained-token");
		then.status(200).header("content-type", "application/json").body("{}");
	});

	client.set_token("chained-token").set_url(server.base_url());

	let _: Value =
		client.post("chained", &RequestParams::new()).expect("Blocking POST should succeed.");

	mock.assert();
}
