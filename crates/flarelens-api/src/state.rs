use std::sync::Arc;

use flarelens_coach::bedrock::BedrockGenerator;
use flarelens_service::FlareService;
use flarelens_store::memory::MemoryLogStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FlareService<MemoryLogStore>>,
    pub generator: Arc<BedrockGenerator>,
}
