#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderValue, header};
use axum_test::{TestResponse, TestServer};
use colsort_core::{MemorySortStore, SortParams};
use colsort_server::{
    AppState, create_app, infra::config::Config, infra::session::SESSION_COOKIE,
    users::UserDirectory,
};
use serde_json::Value;

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemorySortStore>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with_config(Config::default())
}

pub fn build_test_app_with_param(name: &str) -> TestApp {
    build_test_app_with_config(Config {
        sort_params: SortParams::new(name),
        ..Config::default()
    })
}

pub fn build_test_app_with_store_limit(max_sort_sessions: usize) -> TestApp {
    build_test_app_with_config(Config {
        max_sort_sessions,
        ..Config::default()
    })
}

fn build_test_app_with_config(config: Config) -> TestApp {
    let store = Arc::new(MemorySortStore::with_capacity(config.max_sort_sessions));
    let users = UserDirectory::seeded().expect("seeded directory");
    let state = AppState::with_store(config, store.clone(), users);
    let server = TestServer::new(create_app(state)).expect("test server");
    TestApp { server, store }
}

/// Session id minted by the server, read from `Set-Cookie`.
pub fn minted_session(response: &TestResponse) -> String {
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie header")
        .to_str()
        .expect("ascii cookie");
    let pair = cookie.split(';').next().expect("cookie pair");
    let (name, value) = pair.split_once('=').expect("name=value");
    assert_eq!(name, SESSION_COOKIE);
    value.to_string()
}

pub fn session_cookie(session: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{SESSION_COOKIE}={session}")).expect("cookie header")
}

pub fn sort_of(body: &Value) -> (String, String) {
    let sort = &body["data"]["sort"];
    (
        sort["column_key"].as_str().expect("column_key").to_string(),
        sort["direction"].as_str().expect("direction").to_string(),
    )
}

pub fn logins(body: &Value) -> Vec<String> {
    body["data"]["users"]
        .as_array()
        .expect("users array")
        .iter()
        .map(|user| user["login"].as_str().expect("login").to_string())
        .collect()
}
