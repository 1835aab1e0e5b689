use crate::config::ServerConfig;
use crate::room::Registry;
use crate::signaling::{SignalingRouter, SignalingService};
use std::sync::Arc;

pub struct AppState {
    pub registry: Arc<Registry>,
    pub signaling: SignalingService,
    pub router: SignalingRouter,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let registry = Arc::new(Registry::new());
        let signaling = SignalingService::new(config.ice_servers);
        let router = SignalingRouter::new(registry.clone(), Arc::new(signaling.clone()));

        Self {
            registry,
            signaling,
            router,
        }
    }
}
