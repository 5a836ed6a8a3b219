//! CLI module for servicebox
//!
//! Flags select a built-in service, the port, and an optional delay override.

pub mod list;

use clap::Parser;
use std::time::Duration;

/// ServiceBox service simulator - mock backend with a boot-then-ready /health endpoint
#[derive(Parser, Debug)]
#[command(name = "servicebox")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SERVICEBOX_HOST         Bind address (default: 0.0.0.0)
    SERVICEBOX_LOG_LEVEL    Log level (default: info)

EXAMPLE:
    servicebox --name auth-service --port 8081 --startup-delay 2
"#)]
pub struct Cli {
    /// Service name (see --list)
    #[arg(long, required_unless_present = "list")]
    pub name: Option<String>,

    /// Port to listen on
    #[arg(short, long, required_unless_present = "list")]
    pub port: Option<u16>,

    /// Override startup delay in seconds
    #[arg(long, value_name = "SECS")]
    pub startup_delay: Option<u64>,

    /// Bind address
    #[arg(short = 'H', long, default_value = crate::config::DEFAULT_HOST, env = "SERVICEBOX_HOST")]
    pub host: String,

    /// Open the listener before the startup delay (health returns 503 while booting)
    #[arg(long, default_value_t = false)]
    pub listen_during_startup: bool,

    /// Print the built-in services and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

impl Cli {
    /// Startup delay override as a `Duration`.
    pub fn startup_delay_override(&self) -> Option<Duration> {
        self.startup_delay.map(Duration::from_secs)
    }
}
