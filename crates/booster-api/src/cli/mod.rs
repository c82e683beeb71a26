//! CLI command definitions for the `prompt-booster` binary.
//!
//! Uses clap derive macros for argument parsing. Every server setting can also
//! come from a `PROMPT_BOOSTER_*` environment variable.

pub mod serve;
pub mod show_config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use booster_api::config::{parse_origin_list, ConfigOverrides, DEFAULT_CONFIG_FILE};
use booster_api::state::AppState;

/// Prompt Booster API server.
#[derive(Parser)]
#[command(name = "prompt-booster", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit logs as newline-delimited JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,booster_api=debug,tower_http=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve(SettingsArgs),

    /// Print the effective configuration as TOML.
    Config {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print JSON instead of TOML.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Config file location, shared by every command that loads it.
#[derive(Args, Debug, Clone)]
pub struct ConfigFileArgs {
    /// Path to the TOML config file [default: ./prompt-booster.toml].
    #[arg(long, env = "PROMPT_BOOSTER_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigFileArgs {
    /// Resolved path, and whether the file must exist.
    pub fn resolve(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }
}

/// Settings that override the config file.
#[derive(Args, Debug, Clone)]
pub struct OverrideArgs {
    /// Interface to bind.
    #[arg(long, env = "PROMPT_BOOSTER_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "PROMPT_BOOSTER_PORT")]
    pub port: Option<u16>,

    /// Allowed CORS origin; repeat or comma-separate for several.
    /// Replaces the configured allow-list.
    #[arg(long = "cors-origin", env = "PROMPT_BOOSTER_CORS_ORIGINS", action = clap::ArgAction::Append)]
    pub cors_origins: Vec<String>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self
                .cors_origins
                .iter()
                .flat_map(|raw| parse_origin_list(raw))
                .collect(),
        }
    }
}

/// Config file plus overrides; everything needed to build the state.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

impl SettingsArgs {
    /// Load, override and validate the config into application state.
    pub async fn load_state(&self) -> anyhow::Result<AppState> {
        let (path, required) = self.file.resolve();
        AppState::init(&path, required, self.overrides.to_overrides())
            .await
            .with_context(|| format!("invalid configuration ({})", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn serve_parses_overrides() {
        let cli = Cli::try_parse_from([
            "prompt-booster",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--cors-origin",
            "https://a.example.com",
            "--cors-origin",
            "https://b.example.com,https://c.example.com",
        ])
        .unwrap();

        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let overrides = args.overrides.to_overrides();
        assert_eq!(overrides.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(overrides.port, Some(9000));
        assert_eq!(
            overrides.cors_origins,
            vec![
                "https://a.example.com",
                "https://b.example.com",
                "https://c.example.com"
            ]
        );
    }

    #[test]
    fn config_path_defaults_to_optional_file() {
        let args = ConfigFileArgs { config: None };
        let (path, required) = args.resolve();
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(!required);

        let args = ConfigFileArgs {
            config: Some(PathBuf::from("/etc/prompt-booster.toml")),
        };
        assert!(args.resolve().1);
    }

    #[test]
    fn verbosity_maps_to_filter() {
        let cli = Cli::try_parse_from(["prompt-booster", "-vv", "config"]).unwrap();
        assert_eq!(cli.default_log_filter(), "trace");
        let cli = Cli::try_parse_from(["prompt-booster", "--quiet", "config"]).unwrap();
        assert_eq!(cli.default_log_filter(), "error");
    }
}
