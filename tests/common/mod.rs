#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use memstore_api::prelude::*;
use memstore_api::routes::{healthcheck_app, shortener_app, user_store_app};

pub fn test_config() -> Config {
    Config::default()
}

pub fn shortener_router() -> Router {
    shortener_app(ShortenerState::in_memory(), &test_config())
}

pub fn shortener_server() -> TestServer {
    TestServer::new(shortener_router()).unwrap()
}

/// Users with IDs 1 and 2, one of them an admin.
pub fn seeded_users() -> Vec<User> {
    vec![
        User::with_role(1, "Grace", Role::Admin, Password::new("grace-pw")),
        User::with_role(2, "Linus", Role::User, Password::new("linus-pw")),
    ]
}

pub fn user_store_router(users: Vec<User>) -> Router {
    let state = UserStoreState::seeded(users).unwrap();
    user_store_app(state, &test_config())
}

pub fn user_server(users: Vec<User>) -> TestServer {
    TestServer::new(user_store_router(users)).unwrap()
}

pub fn healthcheck_server() -> TestServer {
    TestServer::new(healthcheck_app(&test_config())).unwrap()
}
