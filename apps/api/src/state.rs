use std::sync::Arc;

use crate::advisor::session::SessionStore;
use crate::config::Config;
use crate::proxy::Generate;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generation seam. Production wires `ProxyService`; tests swap in
    /// a stub, so nothing below the handlers touches the network.
    pub generator: Arc<dyn Generate>,
    pub sessions: SessionStore,
    pub config: Config,
}
