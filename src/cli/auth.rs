//
//  catchtrend
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! `ct auth login` exchanges a username and password for a bearer token and
//! stores it in the system keyring; every other command reads it from there.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde_json::json;

use super::GlobalOptions;
use crate::api::NetworkError;
use crate::auth::read_secret_from_stdin;
use crate::interactive::{is_interactive, prompt_input, prompt_password};
use crate::output::{print_success, print_warning, write_json};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in with a username and password
    Login(LoginArgs),

    /// Remove the stored credentials
    Logout,

    /// Show whether credentials are stored
    Status,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username; prompted for when omitted
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Read the password from standard input
    #[arg(long)]
    pub password_stdin: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global),
            AuthSubcommand::Status => status(global),
        }
    }
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let can_prompt = !global.no_prompt && is_interactive();

    let username = match &args.username {
        Some(username) => username.clone(),
        None if can_prompt => prompt_input("Username")?,
        None => bail!("--username is required when prompts are disabled"),
    };

    let password = if args.password_stdin {
        read_secret_from_stdin().context("Failed to read password")?
    } else if can_prompt {
        prompt_password("Password")?
    } else {
        bail!("--password-stdin is required when prompts are disabled");
    };

    let client = global.api_client()?;
    let response = client.login(&username, &password).await?;

    if !response.success {
        let reason = if response.message.is_empty() {
            "Login rejected".to_string()
        } else {
            response.message
        };
        return Err(anyhow::Error::new(NetworkError::Unauthorized).context(reason));
    }

    print_success(&format!("Logged in as {}", username));
    Ok(())
}

fn logout(global: &GlobalOptions) -> Result<()> {
    let client = global.api_client()?;
    let was_authenticated = client.auth().is_authenticated();
    client.logout();

    if was_authenticated {
        print_success("Logged out");
    } else {
        print_warning("Not logged in");
    }
    Ok(())
}

fn status(global: &GlobalOptions) -> Result<()> {
    let client = global.api_client()?;
    let snapshot = client.auth().snapshot();

    write_json(&json!({
        "authenticated": snapshot.is_authenticated,
        "username": snapshot.current_username,
        "base_url": client.base_url(),
    }))
}
