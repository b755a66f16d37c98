//! Relay Service
//!
//! Core logic for quote routing, tenant registry and the event ledger.

pub mod jobs;
pub mod ledger;
pub mod provider;
pub mod router;
pub mod tenant;

pub use jobs::{Job, JobError, JobHandle, JobRunner, ProviderHealthJob};
pub use ledger::{LedgerService, LedgerServiceError};
pub use provider::{ProviderService, ProviderServiceError, ProviderStats};
pub use router::{RouterResult, RouterService, RouterServiceError};
pub use tenant::{TenantService, TenantServiceError};
