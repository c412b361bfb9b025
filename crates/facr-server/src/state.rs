//! Shared application state.

use std::sync::Arc;

use facr_core::models::config::FacrConfig;
use facr_core::models::fields::OutputMapper;

/// State shared across request handlers.
///
/// Extraction is stateless per call; the only shared data is the immutable
/// configuration, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<FacrConfig>,
}

impl AppState {
    pub fn new(config: FacrConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Output mapper for the configured key vocabulary.
    pub fn mapper(&self) -> OutputMapper {
        OutputMapper::new(self.config.output.key_style)
            .with_warehouse_code(self.config.output.warehouse_code)
    }
}
