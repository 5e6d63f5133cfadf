use std::sync::Arc;

use crate::core::AppConfig;
use crate::sheets::SheetsClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: AppConfig,
    pub sheets: SheetsClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            sheets: SheetsClient::new(),
        }
    }
}
