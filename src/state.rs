//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::repositories::{FormStore, PermissionStore, UserStore};
use crate::registry::ClientRegistry;

/// Cheaply cloneable bundle of the immutable config, the rate-limit
/// registry and the store collaborators.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ClientRegistry>,
    pub users: Arc<dyn UserStore>,
    pub permissions: Arc<dyn PermissionStore>,
    pub forms: Arc<dyn FormStore>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        registry: Arc<ClientRegistry>,
        users: Arc<dyn UserStore>,
        permissions: Arc<dyn PermissionStore>,
        forms: Arc<dyn FormStore>,
    ) -> Self {
        Self {
            config,
            registry,
            users,
            permissions,
            forms,
        }
    }
}
