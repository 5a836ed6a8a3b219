//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Service process error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested service name is not in the registry
    #[error("Unknown service: {name}")]
    UnknownService {
        /// Name that was requested
        name: String,
        /// Names present in the registry, in registry order
        available: Vec<String>,
    },

    /// Listener could not be bound
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },

    /// Fatal error from the accept loop
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    /// The accept loop returned without an error or a shutdown request
    #[error("Listener closed unexpectedly")]
    ListenerClosed,

    /// Logging could not be initialized
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl ServiceError {
    /// Comma separated list of valid names for `UnknownService`.
    pub fn available_services(&self) -> Option<String> {
        match self {
            ServiceError::UnknownService { available, .. } => Some(available.join(", ")),
            _ => None,
        }
    }
}
