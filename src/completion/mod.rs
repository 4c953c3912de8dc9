//
//  catchtrend
//  completion/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # AI Completion Client
//!
//! A client for an OpenAI-compatible completion service, independent of the
//! CatchTrend backend but built on the same request, transport and status
//! classification layers in [`crate::api`].
//!
//! Two APIs are supported:
//!
//! - **Chat Completions** (`POST {base}/chat/completions`) via
//!   [`CompletionClient::send_chat_completion`] and [`CompletionClient::chat`]
//! - **Responses** (`POST {base}/responses`) via
//!   [`CompletionClient::send_response`] and [`CompletionClient::reasoning`]
//!
//! Calls use the long completion deadline (120 s by default) because
//! reasoning models routinely think for over a minute.
//!
//! ## Example
//!
//! ```rust,no_run
//! use catchtrend::completion::{AiModel, CompletionClient};
//!
//! # async fn example() -> Result<(), catchtrend::completion::CompletionError> {
//! let api_key = std::env::var("OPENAI_API_KEY").ok();
//! let client = CompletionClient::new("https://api.openai.com/v1", api_key, AiModel::Gpt5Mini)?;
//!
//! let reply = client.chat("You are a terse market analyst.", "Summarize CONL today.").await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod model;
mod types;

pub use client::*;
pub use error::*;
pub use model::*;
pub use types::*;
