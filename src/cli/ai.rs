//
//  catchtrend
//  cli/ai.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! AI completion commands.
//!
//! The API key is read from the environment variable named by
//! `completion.api_key_env` (default `OPENAI_API_KEY`).

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde_json::json;

use super::GlobalOptions;
use crate::completion::{AiModel, CompletionClient, ReasoningConfig};
use crate::output::write_json;

#[derive(Args, Debug)]
pub struct AiCommand {
    #[command(subcommand)]
    pub command: AiSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AiSubcommand {
    /// Send a system prompt and a message, print the reply
    Chat(ChatArgs),

    /// Run a reasoning request, print the answer and its summary
    Reason(ReasonArgs),

    /// List the supported models
    Models,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// The message to send
    pub message: String,

    /// System prompt
    #[arg(long, short = 's', default_value = "You are a helpful trading assistant.")]
    pub system: String,

    /// Model, overriding completion.model
    #[arg(long, short = 'm')]
    pub model: Option<AiModel>,
}

#[derive(Args, Debug)]
pub struct ReasonArgs {
    pub input: String,

    #[arg(long, short = 'i', default_value = "Answer concisely.")]
    pub instructions: String,

    #[arg(long, value_enum)]
    pub summary: Option<SummaryLevel>,

    #[arg(long, value_enum)]
    pub effort: Option<Effort>,

    #[arg(long, short = 'm')]
    pub model: Option<AiModel>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SummaryLevel {
    Auto,
    Detailed,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl ReasonArgs {
    fn reasoning_config(&self) -> Option<ReasoningConfig> {
        if self.summary.is_none() && self.effort.is_none() {
            return None;
        }
        let summary = self.summary.map(|s| match s {
            SummaryLevel::Auto => "auto",
            SummaryLevel::Detailed => "detailed",
        });
        let effort = self.effort.map(|e| match e {
            Effort::Low => "low",
            Effort::Medium => "medium",
            Effort::High => "high",
        });
        Some(ReasoningConfig::new(effort, summary))
    }
}

impl AiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AiSubcommand::Chat(args) => {
                let client = completion_client(global, args.model)?;
                let reply = client.chat(&args.system, &args.message).await?;
                println!("{}", reply);
                Ok(())
            }
            AiSubcommand::Reason(args) => {
                let client = completion_client(global, args.model)?;
                let (answer, summary) = client
                    .reasoning(&args.instructions, &args.input, args.reasoning_config())
                    .await?;
                write_json(&json!({ "answer": answer, "reasoning_summary": summary }))
            }
            AiSubcommand::Models => {
                let models: Vec<_> = AiModel::ALL
                    .iter()
                    .map(|model| {
                        json!({
                            "model": model.as_str(),
                            "reasoning": model.is_reasoning_model(),
                            "system_role": !model.rejects_system_role(),
                            "temperature": model.temperature(),
                            "max_tokens": model.recommended_max_tokens(),
                        })
                    })
                    .collect();
                write_json(&models)
            }
        }
    }
}

fn completion_client(global: &GlobalOptions, model: Option<AiModel>) -> Result<CompletionClient> {
    let mut config = global.config()?.completion;
    if let Some(model) = model {
        config.model = model.as_str().to_string();
    }
    CompletionClient::from_config(&config).context("Failed to create completion client")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(summary: Option<SummaryLevel>, effort: Option<Effort>) -> ReasonArgs {
        ReasonArgs {
            input: "Why did CONL gap up?".to_string(),
            instructions: "Answer concisely.".to_string(),
            summary,
            effort,
            model: None,
        }
    }

    #[test]
    fn test_reasoning_config_omitted_by_default() {
        assert_eq!(args(None, None).reasoning_config(), None);
    }

    #[test]
    fn test_reasoning_config_from_flags() {
        let config = args(Some(SummaryLevel::Detailed), Some(Effort::High))
            .reasoning_config()
            .unwrap();
        assert_eq!(config, ReasoningConfig::high_effort());
    }
}
