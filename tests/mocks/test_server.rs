//! Test server for integration tests
//!
//! Spawns the relay on an ephemeral port with mock adapters wired in.

use axum::Router;
use quote_relay::{
	api::create_router,
	mocks::{mock_provider, MockQuoteAdapter},
	RelayBuilder, Settings,
};
use tokio::task::JoinHandle;

/// Test server instance with configurable settings
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with two mock providers quoting different amounts
	///
	/// "provider-best" always quotes the larger output amount, so tests can
	/// assert on a known winner.
	#[allow(dead_code)]
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let best = MockQuoteAdapter::new("mock-best", "2500000", "100");
		let runner_up = MockQuoteAdapter::new("mock-runner-up", "1800000", "50");

		let (_router, state) = RelayBuilder::default()
			.with_settings(Settings::default())
			.with_adapter(Box::new(best))
			.with_adapter(Box::new(runner_up))
			.with_provider(mock_provider("provider-best", "mock-best"))
			.with_provider(mock_provider("provider-runner-up", "mock-runner-up"))
			.start()
			.await?;

		let app: Router = create_router().with_state(state);
		Self::spawn_server_with_app(app).await
	}

	/// Spawn a test server where every provider quote ties
	///
	/// Both providers return identical amount and cost; selection must fall
	/// back to configuration order.
	#[allow(dead_code)]
	pub async fn spawn_with_tied_providers() -> Result<Self, Box<dyn std::error::Error>> {
		let tie_a = MockQuoteAdapter::new("mock-tie-a", "2000000", "75");
		let tie_b = MockQuoteAdapter::new("mock-tie-b", "2000000", "75");

		let (_router, state) = RelayBuilder::default()
			.with_settings(Settings::default())
			.with_adapter(Box::new(tie_a))
			.with_adapter(Box::new(tie_b))
			.with_provider(mock_provider("provider-tie-a", "mock-tie-a"))
			.with_provider(mock_provider("provider-tie-b", "mock-tie-b"))
			.start()
			.await?;

		let app: Router = create_router().with_state(state);
		Self::spawn_server_with_app(app).await
	}

	/// Spawn a test server where every provider fails
	#[allow(dead_code)]
	pub async fn spawn_with_failing_providers() -> Result<Self, Box<dyn std::error::Error>> {
		let down = MockQuoteAdapter::new("mock-down", "0", "0").failing();

		let (_router, state) = RelayBuilder::default()
			.with_settings(Settings::default())
			.with_adapter(Box::new(down))
			.with_provider(mock_provider("provider-down", "mock-down"))
			.start()
			.await?;

		let app: Router = create_router().with_state(state);
		Self::spawn_server_with_app(app).await
	}

	/// Spawn a test server with no providers configured
	#[allow(dead_code)]
	pub async fn spawn_minimal() -> Result<Self, Box<dyn std::error::Error>> {
		let (_router, state) = RelayBuilder::default().start().await?;
		let app: Router = create_router().with_state(state);

		Self::spawn_server_with_app(app).await
	}

	/// Common server spawning logic
	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
