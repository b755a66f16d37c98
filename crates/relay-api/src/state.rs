use std::sync::Arc;

use relay_service::{LedgerService, ProviderService, RouterService, TenantService};
use relay_storage::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub router_service: Arc<RouterService>,
	pub tenant_service: Arc<TenantService>,
	pub ledger_service: Arc<LedgerService>,
	pub provider_service: Arc<ProviderService>,
	pub storage: Arc<dyn Storage>,
}
