//
//  catchtrend
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod ai;
mod analysis;
mod auth;
mod completion;
mod config;
mod stock;

pub use ai::AiCommand;
pub use analysis::AnalysisCommand;
pub use auth::AuthCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use stock::StockCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::ApiClient;
use crate::config::Config;

/// CatchTrend from the command line
#[derive(Parser, Debug)]
#[command(
    name = "ct",
    version,
    about = "Query CatchTrend market data and analysis from the command line",
    long_about = "ct is a CLI for the CatchTrend strategy backend.\n\n\
                  It fetches quotes, K-lines and intraday analysis, and can ask an AI model about them.",
    propagate_version = true,
    after_help = "Use 'ct <command> --help' for more information about a command.\n\
                  Set CT_DEBUG=debug to see request logs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Backend base URL, overriding the config file and CT_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Never prompt; fail instead when input is missing
    #[arg(long, global = true, env = "CT_NO_PROMPT")]
    pub no_prompt: bool,
}

impl GlobalOptions {
    /// Loads the configuration with command-line overrides applied.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load().context("Failed to load configuration")?;
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        Ok(config)
    }

    /// Builds the backend client from the effective configuration.
    pub fn api_client(&self) -> Result<ApiClient> {
        let config = self.config()?;
        ApiClient::from_config(&config).context("Failed to create API client")
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in, log out and show login status
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Fetch quotes, K-lines and intraday data
    #[command(visible_alias = "s")]
    Stock(StockCommand),

    /// Fetch CONL intraday analysis
    Analysis(AnalysisCommand),

    /// Ask an AI model
    Ai(AiCommand),

    /// Read and write configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Seconds since the epoch, used as the cache-busting timestamp.
pub(crate) fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
