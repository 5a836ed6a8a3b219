use axum::Router;
use servicebox::config::ServiceConfig;
use servicebox::registry::ServiceRegistry;
use servicebox::{api, AppState};

/// テスト用のサービスを作成する（.oneshot()スタイルのテスト用）
#[allow(dead_code)]
pub fn create_test_service(name: &str) -> (Router, AppState) {
    let config = ServiceConfig::resolve(ServiceRegistry::builtin(), name, 0)
        .expect("built-in service should exist");
    let state = AppState::new(&config);
    let app = api::create_app(state.clone());
    (app, state)
}

/// READY状態のテスト用サービスを作成する
#[allow(dead_code)]
pub fn create_ready_service(name: &str) -> (Router, AppState) {
    let (app, state) = create_test_service(name);
    state.runtime.mark_ready();
    (app, state)
}
