//! 共通型定義
//!
//! Response payloads and the crate-wide error type.

/// エラー型定義
pub mod error;

/// JSONレスポンスボディ
pub mod types;
