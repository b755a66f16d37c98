//! HTTP request handlers

pub mod common;
pub mod events;
pub mod health;
pub mod providers;
pub mod quotes;
pub mod tenants;

pub use events::{get_event_aggregate, get_events, post_events};
pub use health::{health, ready};
pub use providers::get_providers;
pub use quotes::post_quotes;
pub use tenants::{get_tenant_by_id, get_tenants, post_tenants};
