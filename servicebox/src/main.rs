//! ServiceBox service simulator entry point
//!
//! Usage: servicebox --name auth-service --port 8081 --startup-delay 2

use clap::Parser;
use servicebox::cli::{self, Cli};
use servicebox::common::error::ServiceError;
use servicebox::config::ServiceConfig;
use servicebox::registry::ServiceRegistry;
use servicebox::shutdown::ShutdownController;
use servicebox::{logging, server};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let registry = ServiceRegistry::builtin();

    if cli.list {
        cli::list::execute(registry);
        return;
    }

    let (Some(name), Some(port)) = (cli.name.as_deref(), cli.port) else {
        eprintln!("Error: --name and --port are required");
        std::process::exit(2);
    };

    // サービス名の検証はスリープ・バインド前に行う
    let config = match ServiceConfig::resolve(registry, name, port) {
        Ok(config) => config
            .with_startup_delay(cli.startup_delay_override())
            .with_host(cli.host.clone())
            .with_listen_during_startup(cli.listen_during_startup),
        Err(err) => exit_with(err),
    };

    if let Err(err) = logging::init(config.name()) {
        exit_with(err);
    }

    match server::run(config, ShutdownController::default()).await {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("{}", err);
            exit_with(err);
        }
    }
}

fn exit_with(err: ServiceError) -> ! {
    eprintln!("{}", err);
    if let Some(available) = err.available_services() {
        eprintln!("Available: {}", available);
    }
    std::process::exit(1);
}
