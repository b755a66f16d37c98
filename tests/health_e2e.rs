//! Health and readiness E2E tests

mod mocks;

use crate::mocks::TestServer;
use reqwest::Client;

#[tokio::test]
async fn test_health_endpoint() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	assert_eq!(resp.text().await.unwrap(), "OK");

	server.abort();
}

#[tokio::test]
async fn test_ready_endpoint() {
	let server = TestServer::spawn()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/ready", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "ready");
	assert_eq!(body["storageHealthy"], true);

	server.abort();
}

#[tokio::test]
async fn test_response_carries_request_id_and_security_headers() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.headers().contains_key("x-request-id"));
	assert_eq!(
		resp.headers().get("x-content-type-options").unwrap(),
		"nosniff"
	);

	server.abort();
}
