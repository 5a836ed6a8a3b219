//! Per-process runtime state.
//!
//! - `ready` flips false→true once, when the startup delay has elapsed.
//! - `started_at` is recorded in the same transition and never before.
//! - `request_count` is bumped once per GET/POST, whatever the outcome.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, OnceLock,
};
use std::time::{Duration, Instant};

/// Lifecycle phase of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Startup delay has not elapsed
    Booting,
    /// Serving normally
    Ready,
}

/// State shared by every request handler of one service instance.
#[derive(Clone, Debug, Default)]
pub struct RuntimeState {
    inner: Arc<RuntimeStateInner>,
}

#[derive(Debug, Default)]
struct RuntimeStateInner {
    ready: AtomicBool,
    started_at: OnceLock<Instant>,
    request_count: AtomicU64,
}

impl RuntimeState {
    /// Returns true once the ready transition has happened.
    pub fn is_ready(&self) -> bool {
        self.inner.ready.load(Ordering::Acquire)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.is_ready() {
            Phase::Ready
        } else {
            Phase::Booting
        }
    }

    /// Transition BOOTING → READY.
    ///
    /// Returns false if the service was already ready; the start instant is
    /// left untouched in that case.
    pub fn mark_ready(&self) -> bool {
        if self.inner.started_at.set(Instant::now()).is_err() {
            return false;
        }
        self.inner.ready.store(true, Ordering::Release);
        true
    }

    /// Time since the ready transition, `None` while booting.
    pub fn uptime(&self) -> Option<Duration> {
        if !self.is_ready() {
            return None;
        }
        self.inner.started_at.get().map(Instant::elapsed)
    }

    /// Count one request and return the new total.
    pub fn record_request(&self) -> u64 {
        self.inner.request_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Requests counted so far.
    pub fn requests_served(&self) -> u64 {
        self.inner.request_count.load(Ordering::SeqCst)
    }
}
