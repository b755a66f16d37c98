//! Background job scheduling
//!
//! Minimal recurring-job runner used for periodic provider health refresh.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::provider::ProviderService;

#[derive(Debug, Error)]
pub enum JobError {
	#[error("job execution failed: {message}")]
	ExecutionFailed { message: String },
}

/// A unit of recurring background work
#[async_trait]
pub trait Job: Send + Sync {
	fn name(&self) -> &str;
	async fn run(&self) -> Result<(), JobError>;
}

/// Handle to a running recurring job; dropping it does not stop the job
pub struct JobHandle {
	name: String,
	handle: JoinHandle<()>,
}

impl JobHandle {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn cancel(&self) {
		debug!("Cancelling background job '{}'", self.name);
		self.handle.abort();
	}

	pub fn is_finished(&self) -> bool {
		self.handle.is_finished()
	}
}

/// Spawns recurring jobs on the tokio runtime
pub struct JobRunner;

impl JobRunner {
	/// Run a job forever at a fixed interval; the first run waits one interval
	pub fn spawn_recurring(job: Arc<dyn Job>, interval: Duration) -> JobHandle {
		let name = job.name().to_string();
		debug!(
			"Scheduling background job '{}' every {:?}",
			name, interval
		);

		let job_name = name.clone();
		let handle = tokio::spawn(async move {
			let mut ticker = tokio::time::interval(interval);
			// First tick fires immediately; skip it so startup isn't blocked
			ticker.tick().await;
			loop {
				ticker.tick().await;
				if let Err(e) = job.run().await {
					warn!("Background job '{}' failed: {}", job_name, e);
				}
			}
		});

		JobHandle { name, handle }
	}
}

/// Recurring job that refreshes stored provider health and metrics
pub struct ProviderHealthJob {
	provider_service: ProviderService,
}

impl ProviderHealthJob {
	pub fn new(provider_service: ProviderService) -> Self {
		Self { provider_service }
	}
}

#[async_trait]
impl Job for ProviderHealthJob {
	fn name(&self) -> &str {
		"provider-health-refresh"
	}

	async fn run(&self) -> Result<(), JobError> {
		let stats = self
			.provider_service
			.refresh_provider_health()
			.await
			.map_err(|e| JobError::ExecutionFailed {
				message: e.to_string(),
			})?;

		debug!(
			"Provider health refresh: {}/{} healthy",
			stats.healthy, stats.total
		);
		Ok(())
	}
}
