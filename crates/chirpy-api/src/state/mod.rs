//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration, and the fileserver hit counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chirpy_common::AppConfig;
use chirpy_service::ServiceContext;

/// Hit counter for the static site under `/app`
///
/// Counts are process-local and reset on restart; the admin reset endpoint
/// also zeroes them explicitly.
#[derive(Debug, Default)]
pub struct Metrics {
    fileserver_hits: AtomicU64,
}

impl Metrics {
    /// Create a zeroed counter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one page hit
    pub fn record_hit(&self) {
        self.fileserver_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Total hits recorded since startup or the last reset
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.fileserver_hits.load(Ordering::Relaxed)
    }

    /// Zero the counter
    pub fn reset(&self) {
        self.fileserver_hits.store(0, Ordering::Relaxed);
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Fileserver hit counter
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the fileserver hit counter
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("fileserver_hits", &self.metrics.hits())
            .finish()
    }
}
