use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Built once at startup and read-only thereafter. The completion client is
/// held as a trait object so tests can substitute a scripted double.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }
}
