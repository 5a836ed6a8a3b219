//! ServiceBox mock service
//!
//! 起動遅延付きの軽量モックHTTPサービス。オーケストレーション／ヘルスチェック
//! ツールの検証用に、`/health` と固定レスポンスのルートを提供する。

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// 組み込みサービス定義
pub mod registry;

/// ランタイム状態（準備完了フラグ・リクエストカウンタ）
pub mod state;

/// 設定管理（CLI引数・環境変数）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

/// Shutdown controller and OS signal handling
pub mod shutdown;

/// サーバー起動・ライフサイクル
pub mod server;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 選択されたサービス定義
    pub service: Arc<registry::ServiceDefinition>,
    /// ランタイム状態
    pub runtime: state::RuntimeState,
}

impl AppState {
    /// Fresh BOOTING state for the configured service.
    pub fn new(config: &config::ServiceConfig) -> Self {
        Self {
            service: config.service.clone(),
            runtime: state::RuntimeState::default(),
        }
    }
}
