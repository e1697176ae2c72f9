use std::sync::Arc;

use crate::{services::lookup_client::lookup_service::PostcodeLookup, utils::app_config::AppConfig};

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn PostcodeLookup>,
    pub config: AppConfig,
}
