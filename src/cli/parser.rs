//! Command line definition.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Environment;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// Operations backend for an HVAC service company
#[derive(Parser, Debug)]
#[command(name = "hvacdesk")]
#[command(about = "Operations backend for an HVAC service company")]
#[command(long_about = "
hvacdesk serves the dispatch board, lead pipeline, reports, customer portal
and technician day view as a JSON API over PostgreSQL.

EXAMPLES:
    # Start the server with the layered config in ./config
    hvacdesk serve

    # Bind to every interface on port 8080
    hvacdesk serve --host 0.0.0.0 --port 8080

    # Check the merged configuration without starting
    hvacdesk serve --dry-run

    # Apply pending migrations, or preview them
    hvacdesk migrate
    hvacdesk migrate --dry-run

    # Revert the last two migrations
    hvacdesk migrate --rollback 2

    # Load demo accounts and sample data
    hvacdesk --env development seed
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Single configuration file, replacing the layered config directory
    ///
    /// Example: --config /etc/hvacdesk/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Which config/{env}.toml layer to apply (overrides HVACDESK_APP_ENV)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server (default)
    ///
    /// Examples:
    ///   hvacdesk serve
    ///   hvacdesk serve --host 0.0.0.0 --port 80
    ///   hvacdesk serve --dry-run
    Serve {
        /// Address to bind to (default 127.0.0.1)
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port to listen on (default 3000)
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level for this run; beats --verbose and --quiet
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate the merged configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Apply, preview or revert database migrations
    ///
    /// Examples:
    ///   hvacdesk migrate
    ///   hvacdesk migrate --dry-run
    ///   hvacdesk migrate --rollback 3
    Migrate {
        /// List pending migrations without applying them
        #[arg(long, conflicts_with = "rollback")]
        dry_run: bool,

        /// Revert this many of the most recent migrations (1-100)
        #[arg(long, value_name = "STEPS", conflicts_with = "dry_run", value_parser = super::validation::validate_rollback_steps)]
        rollback: Option<u32>,
    },
    /// Insert demo accounts and sample operations data
    ///
    /// Does nothing when the demo admin account already exists. Refused in
    /// the production environment.
    Seed,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Argument combinations clap cannot express on its own.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(Commands::Migrate {
            dry_run: true,
            rollback: Some(_),
        }) = self.command
        {
            return Err("Cannot use --dry-run and --rollback together".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}
