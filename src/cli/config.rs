//
//  catchtrend
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the TOML config file. Keys are dotted, e.g.
//! `api.base_url` or `completion.model`.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::{json, Map, Value};

use super::GlobalOptions;
use crate::config::{Config, KEYS};
use crate::output::{print_success, write_json};

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => {
                let config = global.config()?;
                match config.get(&args.key) {
                    Some(value) => {
                        println!("{}", value);
                        Ok(())
                    }
                    None => bail!(
                        "Unknown configuration key '{}'. Valid keys: {}",
                        args.key,
                        KEYS.join(", ")
                    ),
                }
            }
            ConfigSubcommand::Set(args) => {
                // Environment and flag overrides must not leak into the file.
                let mut config = Config::load_from(&Config::config_path()?)?;
                config.set(&args.key, &args.value)?;
                config.save()?;
                print_success(&format!("Set {} to {}", args.key, args.value));
                Ok(())
            }
            ConfigSubcommand::List => write_json(&as_json(&global.config()?)),
            ConfigSubcommand::Path => {
                println!("{}", Config::config_path()?.display());
                Ok(())
            }
        }
    }
}

fn as_json(config: &Config) -> Value {
    let entries: Map<String, Value> = KEYS
        .iter()
        .map(|key| (key.to_string(), json!(config.get(key))))
        .collect();
    Value::Object(entries)
}
