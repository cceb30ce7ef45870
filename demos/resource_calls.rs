//! Demonstrates authenticated GET/POST calls against a REST API, including the
//! trailing-slash path normalization applied to collection endpoints.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::{Value, json};
// self
use oauth2_rest::{client::RestClient, params::RequestParams};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/items/").header("authorization", "Bearer stored-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("[{\"id\":1,\"name\":\"widget\"}]");
		})
		.await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/items/").json_body(json!({ "name": "gadget" }));
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"id\":2,\"name\":\"gadget\"}");
		})
		.await;
	// A token restored from storage is injected directly; no exchange is needed.
	let client = RestClient::new("demo-client", "demo-secret", server.base_url())
		.with_token("stored-token");
	// "items" is normalized to "items/"; "report.json" would be left untouched.
	let items: Value = client.get("items", &RequestParams::new()).await?;

	println!("Existing items: {items}.");

	let created: Value = client.post("items", &RequestParams::from([("name", "gadget")])).await?;

	println!("Created item: {created}.");

	list_mock.assert_async().await;
	create_mock.assert_async().await;

	Ok(())
}
