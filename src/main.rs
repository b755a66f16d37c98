//! Quote Relay Server
//!
//! Main entry point for the relay server

use quote_relay::RelayBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	RelayBuilder::new().start_server().await
}
