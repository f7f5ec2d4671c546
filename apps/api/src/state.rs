use std::sync::Arc;

use crate::render::Labels;
use crate::storage::CvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Saved CVs and credit balances. REST-backed or in-memory, chosen at startup.
    pub store: Arc<dyn CvStore>,
    /// Label set used by every renderer, exporter and generated summary.
    pub labels: Arc<Labels>,
}
