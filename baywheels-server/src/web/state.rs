//! Application state for the web layer.

use std::sync::Arc;

use crate::gbfs::GbfsClient;

/// Shared application state.
///
/// The GBFS client owns the one pooled HTTP connection set for the process.
#[derive(Clone)]
pub struct AppState {
    /// GBFS feed client
    pub gbfs: Arc<GbfsClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(gbfs: GbfsClient) -> Self {
        Self {
            gbfs: Arc::new(gbfs),
        }
    }
}
