//
//  catchtrend
//  completion/types.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Wire types of the Chat Completions and Responses APIs.
//!
//! Only the fields this crate reads or sends are modelled. Optional request
//! fields are omitted from the JSON when unset.

use serde::{Deserialize, Serialize};

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Legacy token limit, rejected by reasoning models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub object: String,

    #[serde(default)]
    pub created: i64,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub choices: Vec<ChatChoice>,

    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,

    pub message: ChatMessage,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Body of `POST /responses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: String,

    /// System-level guidance, the Responses counterpart of a system message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Reasoning effort and summary settings.
///
/// Summaries require an organization verified for them; the service
/// rejects the request otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ReasoningConfig {
    pub fn new(effort: Option<&str>, summary: Option<&str>) -> Self {
        Self {
            effort: effort.map(str::to_string),
            summary: summary.map(str::to_string),
        }
    }

    pub fn auto() -> Self {
        Self::new(None, Some("auto"))
    }

    pub fn detailed() -> Self {
        Self::new(None, Some("detailed"))
    }

    pub fn medium_effort() -> Self {
        Self::new(Some("medium"), Some("auto"))
    }

    pub fn high_effort() -> Self {
        Self::new(Some("high"), Some("detailed"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub object: String,

    #[serde(default)]
    pub created_at: i64,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub output: Vec<ResponseOutput>,

    #[serde(default)]
    pub usage: Option<ResponseUsage>,
}

impl ResponsesResponse {
    /// The answer text and, when present, the reasoning summary.
    ///
    /// The answer is the concatenation of every `output_text` item of every
    /// `message` output. The summary is taken from the last `reasoning`
    /// output that has one, its parts joined by newlines.
    pub fn extract(&self) -> (String, Option<String>) {
        let mut content = String::new();
        let mut summary = None;

        for output in &self.output {
            match output.kind.as_str() {
                "message" => {
                    let texts = output
                        .content
                        .iter()
                        .filter(|item| item.kind == "output_text")
                        .filter_map(|item| item.text.as_deref());
                    content.extend(texts);
                }
                "reasoning" if !output.summary.is_empty() => {
                    let parts: Vec<&str> = output.summary.iter().map(SummaryPart::text).collect();
                    summary = Some(parts.join("\n"));
                }
                _ => {}
            }
        }

        (content, summary)
    }
}

/// One item of the `output` array: a `message`, a `reasoning` block or a
/// tool call this crate ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseOutput {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub content: Vec<ContentItem>,

    #[serde(default)]
    pub summary: Vec<SummaryPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub text: Option<String>,
}

/// A reasoning summary part, either bare text or `{"type", "text"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryPart {
    Text(String),
    Typed { text: String },
}

impl SummaryPart {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Typed { text } => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,

    #[serde(default)]
    pub output_tokens_details: Option<OutputTokensDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTokensDetails {
    #[serde(default)]
    pub reasoning_tokens: Option<u64>,
}

/// Error body returned by the completion service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorDetail {
    pub message: String,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub param: Option<String>,

    #[serde(default)]
    pub code: Option<String>,
}
