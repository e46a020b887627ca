//! Command line entry points
//!
//! - `serve`: run the HTTP API
//! - `migrate`: apply pending PostgreSQL migrations and exit

pub mod migrate;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Aurora Users - CRUD REST service for user records
#[derive(Parser)]
#[command(name = "aurora-users")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),

    /// Apply database migrations for the postgres backend
    Migrate,
}

/// Reads `.env`, loads configuration and installs the log subscriber.
/// A configuration that cannot be parsed stops startup.
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    finish_bootstrap(AppConfig::load())
}

fn finish_bootstrap(loaded: Result<AppConfig, config::ConfigError>) -> anyhow::Result<AppConfig> {
    let config = loaded.context("Failed to load configuration")?;
    logging::init_logging(&config.logging);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageBackend;

    #[test]
    fn test_parse_serve_with_overrides() {
        let args = ["aurora-users", "serve", "--host", "127.0.0.1", "--port", "9000"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(9000));
            }
            Command::Migrate => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_serve_without_overrides() {
        let cli = Cli::try_parse_from(["aurora-users", "serve"]).unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert!(args.host.is_none());
                assert!(args.port.is_none());
            }
            Command::Migrate => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_migrate() {
        let cli = Cli::try_parse_from(["aurora-users", "migrate"]).unwrap();
        assert!(matches!(cli.command, Command::Migrate));
    }

    #[test]
    fn test_bootstrap_fails_on_unparseable_config() {
        let vars = [
            ("APP__STORAGE__BACKEND", "postgres"),
            ("APP__STORAGE__DATABASE_URL", "postgres://db/prod"),
            ("APP__SERVER__PORT", "80800"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let err = finish_bootstrap(AppConfig::load_with_env(Some(vars))).unwrap_err();

        assert!(format!("{:#}", err).starts_with("Failed to load configuration"));
    }

    #[test]
    fn test_bootstrap_keeps_postgres_backend() {
        let vars = [
            ("APP__STORAGE__BACKEND", "postgres"),
            ("APP__STORAGE__DATABASE_URL", "postgres://db/prod"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = finish_bootstrap(AppConfig::load_with_env(Some(vars))).unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Postgres);
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["aurora-users", "serve", "--port", "http"]).is_err());
    }
}
