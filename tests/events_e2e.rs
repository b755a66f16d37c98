//! Event ledger API E2E tests
//!
//! Tests for appending tenant events and reading the aggregate view.

mod mocks;

use crate::mocks::TestServer;
use reqwest::Client;
use serde_json::json;

async fn register_tenant(client: &Client, base_url: &str, name: &str) -> String {
	let resp = client
		.post(format!("{}/v1/tenants", base_url))
		.json(&json!({"displayName": name}))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 201);

	let body: serde_json::Value = resp.json().await.unwrap();
	body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_append_event_and_aggregate() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let tenant_id = register_tenant(&client, &server.base_url, "Acme").await;

	let resp = client
		.post(format!(
			"{}/v1/tenants/{}/events",
			server.base_url, tenant_id
		))
		.json(&json!({"payload": {"x": 1}}))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), 201);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["tenantId"], tenant_id.as_str());
	assert_eq!(body["payload"]["x"], 1);
	assert!(body.get("eventId").is_some());

	let resp = client
		.get(format!(
			"{}/v1/tenants/{}/events/aggregate",
			server.base_url, tenant_id
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["count"], 1);
	assert!(!body["lastSeen"].is_null());

	server.abort();
}

#[tokio::test]
async fn test_aggregate_without_events() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let tenant_id = register_tenant(&client, &server.base_url, "Quiet Corp").await;

	let resp = client
		.get(format!(
			"{}/v1/tenants/{}/events/aggregate",
			server.base_url, tenant_id
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["count"], 0);
	assert!(body["lastSeen"].is_null());

	server.abort();
}

#[tokio::test]
async fn test_list_events_in_receipt_order() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let tenant_id = register_tenant(&client, &server.base_url, "Acme").await;

	for i in 0..2 {
		let resp = client
			.post(format!(
				"{}/v1/tenants/{}/events",
				server.base_url, tenant_id
			))
			.json(&json!({"payload": {"seq": i}}))
			.send()
			.await
			.unwrap();
		assert_eq!(resp.status(), 201);
	}

	let resp = client
		.get(format!(
			"{}/v1/tenants/{}/events",
			server.base_url, tenant_id
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["totalEvents"], 2);
	let events = body["events"].as_array().unwrap();
	assert_eq!(events.len(), 2);
	assert_eq!(events[0]["payload"]["seq"], 0);
	assert_eq!(events[1]["payload"]["seq"], 1);

	server.abort();
}

#[tokio::test]
async fn test_list_events_unknown_tenant() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/v1/tenants/non-existent-tenant/events",
			server.base_url
		))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), 404);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "TENANT_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn test_append_event_unknown_tenant() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!(
			"{}/v1/tenants/non-existent-tenant/events",
			server.base_url
		))
		.json(&json!({"payload": {"x": 1}}))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), 404);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "TENANT_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn test_aggregate_unknown_tenant() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/v1/tenants/non-existent-tenant/events/aggregate",
			server.base_url
		))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), 404);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "TENANT_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn test_append_event_rejects_non_object_payload() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let tenant_id = register_tenant(&client, &server.base_url, "Acme").await;

	let resp = client
		.post(format!(
			"{}/v1/tenants/{}/events",
			server.base_url, tenant_id
		))
		.json(&json!({"payload": "just a string"}))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), 400);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "VALIDATION_ERROR");

	server.abort();
}

#[tokio::test]
async fn test_aggregate_counts_multiple_events() {
	let server = TestServer::spawn_minimal()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let tenant_id = register_tenant(&client, &server.base_url, "Busy Inc").await;

	for i in 0..3 {
		let resp = client
			.post(format!(
				"{}/v1/tenants/{}/events",
				server.base_url, tenant_id
			))
			.json(&json!({"payload": {"seq": i}}))
			.send()
			.await
			.unwrap();
		assert_eq!(resp.status(), 201);
	}

	let resp = client
		.get(format!(
			"{}/v1/tenants/{}/events/aggregate",
			server.base_url, tenant_id
		))
		.send()
		.await
		.unwrap();

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["count"], 3);

	server.abort();
}
