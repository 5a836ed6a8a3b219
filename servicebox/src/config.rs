//! Configuration management
//!
//! Environment variable helpers and the per-process `ServiceConfig` resolved
//! from CLI flags and the service registry.

use crate::common::error::ServiceError;
use crate::registry::{ServiceDefinition, ServiceRegistry};
use std::sync::Arc;
use std::time::Duration;

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Get an environment variable with fallback to a secondary name
///
/// If the primary variable is set, returns its value.
/// If only the fallback variable is set, returns its value and logs at debug level.
///
/// # Example
/// ```
/// use servicebox::config::get_env_with_fallback;
///
/// let level = get_env_with_fallback("SERVICEBOX_LOG_LEVEL", "LOG_LEVEL");
/// ```
pub fn get_env_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    if let Ok(val) = std::env::var(primary) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(fallback) {
        tracing::debug!("Using '{}' because '{}' is not set", fallback, primary);
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(primary: &str, fallback: &str, default: &str) -> String {
    get_env_with_fallback(primary, fallback).unwrap_or_else(|| default.to_string())
}

/// Log level for the process (`SERVICEBOX_LOG_LEVEL`, then `LOG_LEVEL`, default `info`).
pub fn log_level() -> String {
    get_env_with_fallback_or("SERVICEBOX_LOG_LEVEL", "LOG_LEVEL", "info")
}

/// Fully resolved configuration for one service process.
///
/// Built once at startup and injected into the router; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Selected registry entry
    pub service: Arc<ServiceDefinition>,
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Effective startup delay (override or registry default)
    pub startup_delay: Duration,
    /// Open the listener before the startup delay elapses
    pub listen_during_startup: bool,
}

impl ServiceConfig {
    /// Select `name` from the registry. Fails before anything is bound or slept.
    pub fn resolve(
        registry: &ServiceRegistry,
        name: &str,
        port: u16,
    ) -> Result<Self, ServiceError> {
        let service = registry.get(name)?.clone();
        Ok(Self::from_definition(service, port))
    }

    /// Wrap an arbitrary definition, using its default delay.
    pub fn from_definition(service: ServiceDefinition, port: u16) -> Self {
        Self {
            startup_delay: service.default_startup_delay,
            service: Arc::new(service),
            host: DEFAULT_HOST.to_string(),
            port,
            listen_during_startup: false,
        }
    }

    /// Replace the registry default delay when an override is given.
    pub fn with_startup_delay(mut self, delay: Option<Duration>) -> Self {
        if let Some(delay) = delay {
            self.startup_delay = delay;
        }
        self
    }

    /// Set the bind address.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Open the listener while still booting.
    pub fn with_listen_during_startup(mut self, enabled: bool) -> Self {
        self.listen_during_startup = enabled;
        self
    }

    /// Service name shortcut.
    pub fn name(&self) -> &str {
        &self.service.name
    }

    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
