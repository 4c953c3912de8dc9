//
//  catchtrend
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Command results are printed as pretty JSON on stdout so they can be piped
//! to `jq`. Human-oriented status lines go to stderr, styled with `console`
//! when colors are enabled.

mod json;

pub use json::*;

use console::style;

/// Prints a success line to stderr, e.g. `✓ Logged in as sui`.
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Prints a warning line to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}
