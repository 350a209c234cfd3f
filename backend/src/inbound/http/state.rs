//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EnergyDashboardQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub dashboard: Arc<dyn EnergyDashboardQuery>,
}

impl HttpState {
    /// Bundle the dashboard port for handlers.
    pub fn new(dashboard: Arc<dyn EnergyDashboardQuery>) -> Self {
        Self { dashboard }
    }
}
