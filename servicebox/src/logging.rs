//! ロギング初期化ユーティリティ
//!
//! Every line goes to stdout as `[YYYY-MM-DDTHH:MM:SSZ] [<service>] <message>`.
//! Stdout is line buffered, so each event is visible as soon as it is written.

use crate::common::error::ServiceError;
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{level_filters::LevelFilter, Event, Subscriber};
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Timestamp format used in every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render `time` the way log lines do.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Event formatter that prefixes each line with a UTC timestamp and the service name.
#[derive(Debug, Clone)]
pub struct ServiceLineFormat {
    service: String,
}

impl ServiceLineFormat {
    /// Formatter for `service`.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for ServiceLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "[{}] [{}] ",
            format_timestamp(Utc::now()),
            self.service
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Crate whose events carry the lifecycle and access-log lines.
const CRATE_TARGET: &str = "servicebox";

/// Turn the configured level into filter directives.
///
/// The crate's own target never drops below `info`: lifecycle and request
/// lines stay visible even when other targets are turned down. An explicit
/// `servicebox=<level>` or a global level more verbose than `info` still wins.
pub fn filter_directives(level: &str) -> String {
    let mut directives = Vec::new();
    let mut crate_level = None;
    let mut global_level = None;

    for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        if let Some(value) = directive
            .strip_prefix(CRATE_TARGET)
            .and_then(|rest| rest.strip_prefix('='))
        {
            if let Ok(parsed) = value.parse::<LevelFilter>() {
                crate_level = Some(parsed);
            }
            continue;
        }
        if !directive.contains('=') {
            if let Ok(parsed) = directive.parse::<LevelFilter>() {
                global_level = Some(parsed);
            }
        }
        directives.push(directive.to_string());
    }

    let floor = crate_level
        .or(global_level)
        .unwrap_or(LevelFilter::INFO)
        .max(LevelFilter::INFO);
    directives.push(format!(
        "{}={}",
        CRATE_TARGET,
        floor.to_string().to_lowercase()
    ));
    directives.join(",")
}

/// Install the global subscriber for `service`.
///
/// The level comes from `SERVICEBOX_LOG_LEVEL` (fallback `LOG_LEVEL`); an
/// unparsable value falls back to `info`.
pub fn init(service: &str) -> Result<(), ServiceError> {
    let level = crate::config::log_level();
    let filter = EnvFilter::try_new(filter_directives(&level))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives("info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::io::stdout)
                .event_format(ServiceLineFormat::new(service)),
        )
        .try_init()
        .map_err(|err| ServiceError::Logging(err.to_string()))
}
