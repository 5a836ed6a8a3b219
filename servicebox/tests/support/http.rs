use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use servicebox::config::ServiceConfig;
use servicebox::shutdown::{ShutdownController, ShutdownReason};
use servicebox::{common::error::ServiceError, server, AppState};
use std::time::Duration;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// oneshotでリクエストを送り、ステータス・Content-Type・JSONボディを返す
#[allow(dead_code)]
pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, content_type, json)
}

/// 空きポートを確保する
#[allow(dead_code)]
pub fn unique_test_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve test port");
    let port = listener
        .local_addr()
        .expect("failed to read test port")
        .port();
    drop(listener);
    port
}

/// server::run をバックグラウンドで動かすテストサーバー
#[allow(dead_code)]
pub struct TestService {
    pub port: u16,
    pub state: AppState,
    shutdown: ShutdownController,
    handle: JoinHandle<Result<ShutdownReason, ServiceError>>,
}

#[allow(dead_code)]
impl TestService {
    pub fn spawn(config: ServiceConfig) -> Self {
        let port = config.port;
        let state = AppState::new(&config);
        let shutdown = ShutdownController::default();
        let handle = tokio::spawn(server::run_with_state(
            config,
            state.clone(),
            shutdown.clone(),
        ));
        Self {
            port,
            state,
            shutdown,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    pub fn is_listening(&self) -> bool {
        std::net::TcpStream::connect(("127.0.0.1", self.port)).is_ok()
    }

    /// リスナーが開くまで待機する
    pub async fn wait_until_listening(&self, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        while tokio::time::Instant::now() < deadline {
            if self.is_listening() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        false
    }

    /// 停止要求を出し、終了理由を返す
    pub async fn stop(self) -> ShutdownReason {
        self.shutdown.request_shutdown();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("service did not stop")
            .expect("service task panicked")
            .expect("service returned an error")
    }
}
