//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Extension;
use axum::Router;
use axum::extract::ConnectInfo;
use chrono::Utc;
use clap::Parser;

use bioaff_api::config::Config;
use bioaff_api::domain::entities::User;
use bioaff_api::infrastructure::memory::{MemoryFormStore, MemoryPermissionStore, MemoryUserStore};
use bioaff_api::registry::ClientRegistry;
use bioaff_api::routes::api_router;
use bioaff_api::state::AppState;

/// Activated account holding both form permissions.
pub const ACTIVATED_TOKEN: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAA";
/// Account that never completed activation.
pub const INACTIVE_TOKEN: &str = "BBBBBBBBBBBBBBBBBBBBBBBBBB";
/// Activated account with no permission grants.
pub const NO_PERMISSION_TOKEN: &str = "CCCCCCCCCCCCCCCCCCCCCCCCCC";
/// Activated account holding only `forms:read`.
pub const READ_ONLY_TOKEN: &str = "DDDDDDDDDDDDDDDDDDDDDDDDDD";

pub fn test_config(args: &[&str]) -> Config {
    let mut argv = vec!["bioaff-api"];
    argv.extend_from_slice(args);
    Config::try_parse_from(argv).unwrap()
}

fn user(id: i64, name: &str, activated: bool) -> User {
    User {
        id,
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        activated,
        created_at: Utc::now(),
    }
}

/// Builds an [`AppState`] over seeded in-memory stores.
pub fn test_state(config: Config) -> AppState {
    let users = MemoryUserStore::new();
    users.insert(ACTIVATED_TOKEN, user(1, "Alice Rivera", true));
    users.insert(INACTIVE_TOKEN, user(2, "Ben Okafor", false));
    users.insert(NO_PERMISSION_TOKEN, user(3, "Carol Mendez", true));
    users.insert(READ_ONLY_TOKEN, user(4, "Dana Petrov", true));

    let permissions = MemoryPermissionStore::new();
    permissions.grant(1, "forms:read");
    permissions.grant(1, "forms:write");
    permissions.grant(4, "forms:read");

    let registry = Arc::new(ClientRegistry::new(
        config.limiter_rps,
        config.limiter_burst,
    ));

    AppState::new(
        Arc::new(config),
        registry,
        Arc::new(users),
        Arc::new(permissions),
        Arc::new(MemoryFormStore::new()),
    )
}

/// Peer address stamped onto every test request.
pub fn peer_addr() -> SocketAddr {
    "203.0.113.9:52100".parse().unwrap()
}

/// The full application router with a fixed peer address attached, standing
/// in for the connect info the real listener provides.
pub fn app(state: AppState) -> Router {
    api_router(state).layer(Extension(ConnectInfo(peer_addr())))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
