// src/api/state.rs
use crate::config::AppConfig;
use crate::gateway::{MealDbGateway, MealGateway};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gateway: Arc<dyn MealGateway>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let gateway = MealDbGateway::new(Client::new(), &config);
        Self::with_gateway(config, Arc::new(gateway))
    }

    /// State backed by a caller-supplied gateway.
    pub fn with_gateway(config: AppConfig, gateway: Arc<dyn MealGateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }
}
