use std::sync::Arc;

use tracing::{debug, info};

use crate::config::UsersInfoConfig;
use crate::contract::client::UsersInfoApi;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UsersInfoLocalClient;

/// Users info module: owns the domain service and exposes it through [`UsersInfoApi`].
pub struct UsersInfo {
    api: Arc<dyn UsersInfoApi>,
}

impl UsersInfo {
    pub const NAME: &'static str = "users_info";

    pub fn init(cfg: UsersInfoConfig) -> Self {
        info!("Initializing users_info module");
        debug!(
            "Loaded users_info config: validation={:?}, normalize_email={}",
            cfg.validation, cfg.normalize_email
        );

        let service = Service::new(ServiceConfig {
            validation: cfg.validation,
            normalize_email: cfg.normalize_email,
        });
        let api: Arc<dyn UsersInfoApi> = Arc::new(UsersInfoLocalClient::new(Arc::new(service)));

        Self { api }
    }

    pub fn api(&self) -> Arc<dyn UsersInfoApi> {
        self.api.clone()
    }
}

impl Default for UsersInfo {
    fn default() -> Self {
        Self::init(UsersInfoConfig::default())
    }
}
