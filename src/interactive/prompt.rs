//
//  catchtrend
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts
//!
//! Wrappers over `dialoguer` for the few values `ct` asks for at the
//! terminal: the login username and password.
//!
//! # Example
//!
//! ```no_run
//! use catchtrend::interactive::prompt::{prompt_input, prompt_password};
//!
//! let username = prompt_input("Username").unwrap();
//! let password = prompt_password("Password").unwrap();
//! ```

use anyhow::{Context, Result};
use console::Term;
use dialoguer::{Input, Password};

/// Prompts for a non-empty line of text.
///
/// # Errors
///
/// Fails if the terminal interaction fails, e.g. stdin is closed.
pub fn prompt_input(message: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(message)
        .interact_text()
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompts for a password without echoing it.
pub fn prompt_password(message: &str) -> Result<String> {
    Password::new()
        .with_prompt(message)
        .interact()
        .context("Failed to read password")
}

/// Whether prompts can be shown at all.
pub fn is_interactive() -> bool {
    Term::stdout().is_term() && Term::stderr().is_term()
}
