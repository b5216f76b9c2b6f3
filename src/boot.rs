use std::{env, process, str::FromStr as _};

use clap::Parser as _;
use config_rs::Config as ConfigRs;
use tracing::debug;

use crate::{
    app_info::AppInfo,
    cli::{Cli, Commands},
    commands::{serve, version},
    config::Config,
    environment::Environment,
    setup_tracing::setup_tracing_for_command,
};

const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

pub async fn boot() {
    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Version)) {
        version::print_version_info(AppInfo::current());
        return;
    }

    let environment = set_environment();

    let config = read_config(&environment);

    setup_tracing_for_command(&cli.command, &config.tracing.log_level);

    debug!("Environment set to: {:?}", environment);

    match cli.command {
        Some(Commands::Version) => version::print_version_info(AppInfo::current()),
        Some(Commands::Serve) | None => serve::handle_serve_command(environment, config).await,
    }
}

#[must_use]
pub fn set_environment() -> Environment {
    env::var(ENVIRONMENT_VARIABLE)
        .ok()
        .and_then(|s| Environment::from_str(&s).ok())
        .unwrap_or_default()
}

/// Read configuration from the optional per-environment file, then the
/// `APP_`-prefixed process environment (environment wins).
///
/// A missing `secret_token` surfaces here as a deserialization error: all
/// authenticated dispatches depend on it, so startup aborts with a non-zero
/// status before any port is bound. Tracing is not yet initialized at this
/// point, hence stderr.
pub fn read_config(environment: &Environment) -> Config {
    let config_file_name = format!("config/{environment}");

    let loaded = ConfigRs::builder()
        .add_source(config_rs::File::with_name(&config_file_name).required(false))
        .add_source(config_rs::Environment::with_prefix("APP").separator("__"))
        .build()
        .and_then(ConfigRs::try_deserialize);

    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {e}");
            eprintln!("   Check APP_SECRET_TOKEN and the config/{environment} file");
            process::exit(1);
        }
    }
}
