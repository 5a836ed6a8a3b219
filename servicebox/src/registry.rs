//! 組み込みサービス定義
//!
//! The table is compiled into the binary. Order is preserved so that error
//! messages and `--list` output are stable.

use crate::common::error::ServiceError;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::time::Duration;

/// A canned route served by a mock service.
#[derive(Debug, Clone, PartialEq)]
pub struct MockRoute {
    /// Request path, e.g. `/auth/login`
    pub path: String,
    /// Fixed JSON body returned for GET and POST
    pub body: Value,
}

/// Immutable definition of one simulated service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDefinition {
    /// Registry key
    pub name: String,
    /// Startup delay used when no override is given
    pub default_startup_delay: Duration,
    /// Mock routes in declaration order
    pub routes: Vec<MockRoute>,
}

impl ServiceDefinition {
    /// Create a definition with no routes.
    pub fn new(name: impl Into<String>, default_startup_delay: Duration) -> Self {
        Self {
            name: name.into(),
            default_startup_delay,
            routes: Vec::new(),
        }
    }

    /// Add a mock route. `/health` is reserved and ignored; a path that is
    /// already registered keeps its first body.
    pub fn with_route(mut self, path: impl Into<String>, body: Value) -> Self {
        let path = path.into();
        if path != crate::api::HEALTH_PATH && self.route(&path).is_none() {
            self.routes.push(MockRoute { path, body });
        }
        self
    }

    /// Look up the fixed body for `path`.
    pub fn route(&self, path: &str) -> Option<&Value> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| &route.body)
    }
}

/// Lookup table of service definitions.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: Vec<ServiceDefinition>,
}

static BUILTIN: Lazy<ServiceRegistry> = Lazy::new(|| {
    ServiceRegistry::new(vec![
        ServiceDefinition::new("auth-service", Duration::from_secs(2))
            .with_route(
                "/auth/login",
                json!({"action": "login", "status": "mock_token_issued"}),
            )
            .with_route(
                "/auth/validate",
                json!({"action": "validate", "status": "token_valid"}),
            )
            .with_route(
                "/auth/revoke",
                json!({"action": "revoke", "status": "token_revoked"}),
            ),
        ServiceDefinition::new("payment-service", Duration::from_secs(3))
            .with_route(
                "/payment/charge",
                json!({"action": "charge", "status": "payment_processed"}),
            )
            .with_route(
                "/payment/refund",
                json!({"action": "refund", "status": "refund_issued"}),
            )
            .with_route(
                "/payment/balance",
                json!({"balance": 10000, "currency": "USD"}),
            ),
        ServiceDefinition::new("notification-service", Duration::from_secs(1))
            .with_route(
                "/notify/email",
                json!({"action": "email", "status": "queued"}),
            )
            .with_route("/notify/sms", json!({"action": "sms", "status": "queued"}))
            .with_route(
                "/notify/push",
                json!({"action": "push", "status": "queued"}),
            ),
    ])
});

impl ServiceRegistry {
    /// Build a registry from definitions. Later duplicates of a name are ignored.
    pub fn new(definitions: Vec<ServiceDefinition>) -> Self {
        let mut services: Vec<ServiceDefinition> = Vec::with_capacity(definitions.len());
        for def in definitions {
            if !services.iter().any(|existing| existing.name == def.name) {
                services.push(def);
            }
        }
        Self { services }
    }

    /// The table compiled into the binary.
    pub fn builtin() -> &'static ServiceRegistry {
        &BUILTIN
    }

    /// Find a definition by name.
    pub fn get(&self, name: &str) -> Result<&ServiceDefinition, ServiceError> {
        self.services
            .iter()
            .find(|def| def.name == name)
            .ok_or_else(|| ServiceError::UnknownService {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            })
    }

    /// Registered names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|def| def.name.as_str())
    }

    /// All definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.services.iter()
    }
}
