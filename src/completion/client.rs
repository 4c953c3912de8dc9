//
//  catchtrend
//  completion/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The completion HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::{classify_failure, CompletionError};
use super::model::AiModel;
use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ReasoningConfig, ResponsesRequest,
    ResponsesResponse,
};
use crate::api::request::join_path;
use crate::api::{
    decode_body, execute, http_client, parse_base_url, HttpMethod, NetworkError, PreparedRequest,
    TimeoutClass,
};
use crate::config::CompletionConfig;

/// Client for an OpenAI-compatible completion service.
///
/// The API key is held in memory only and never logged. A client without a
/// key can be built, but every call fails with `Unauthorized` before any
/// network traffic.
pub struct CompletionClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    model: AiModel,
    timeout: Duration,
}

impl CompletionClient {
    /// Creates a client with the default completion timeout.
    ///
    /// # Errors
    ///
    /// `InvalidUrl` if `base_url` is not an absolute http(s) URL.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: AiModel,
    ) -> Result<Self, CompletionError> {
        parse_base_url(base_url)?;
        Ok(Self {
            http: http_client()?,
            base_url: base_url.trim().to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model,
            timeout: TimeoutClass::Completion.default_duration(),
        })
    }

    /// Creates a client from configuration, reading the API key from the
    /// configured environment variable.
    ///
    /// # Errors
    ///
    /// `Api` if the configured model is unknown.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let model: AiModel = config
            .model
            .parse()
            .map_err(|e: super::model::UnknownModel| CompletionError::Api(e.to_string()))?;
        Ok(Self::new(&config.base_url, config.api_key(), model)?.with_timeout(config.timeout()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> AiModel {
        self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `POST {base}/chat/completions`.
    pub async fn send_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        debug!(
            "Chat completion: model={}, messages={}",
            request.model,
            request.messages.len()
        );
        let response: ChatCompletionResponse = self.post("/chat/completions", request).await?;
        if let Some(usage) = &response.usage {
            debug!(
                "Tokens: prompt={}, completion={}, total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }
        Ok(response)
    }

    /// Sends one system prompt and one user message, returning the reply.
    ///
    /// Models that reject the `system` role get the system prompt prepended
    /// to the user message instead.
    ///
    /// # Errors
    ///
    /// [`CompletionError::EmptyResponse`] when the service returns no choices.
    pub async fn chat(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CompletionError> {
        let request = self.chat_request(system_prompt, user_message);
        let response = self.send_chat_completion(&request).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }

    /// Builds the request [`chat`](Self::chat) sends.
    pub fn chat_request(&self, system_prompt: &str, user_message: &str) -> ChatCompletionRequest {
        let messages = if self.model.rejects_system_role() {
            debug!("{} rejects the system role, merging prompts", self.model);
            vec![ChatMessage::user(format!("{}\n\n{}", system_prompt, user_message))]
        } else {
            vec![ChatMessage::system(system_prompt), ChatMessage::user(user_message)]
        };

        ChatCompletionRequest {
            model: self.model.as_str().to_string(),
            messages,
            temperature: self.model.temperature(),
            max_tokens: None,
            max_completion_tokens: Some(self.model.recommended_max_tokens()),
        }
    }

    /// `POST {base}/responses`.
    pub async fn send_response(
        &self,
        request: &ResponsesRequest,
    ) -> Result<ResponsesResponse, CompletionError> {
        debug!("Responses call: model={}", request.model);
        let response: ResponsesResponse = self.post("/responses", request).await?;
        if let Some(usage) = &response.usage {
            let reasoning = usage
                .output_tokens_details
                .and_then(|d| d.reasoning_tokens)
                .unwrap_or(0);
            debug!(
                "Tokens: input={}, output={} (reasoning={}), total={}",
                usage.input_tokens, usage.output_tokens, reasoning, usage.total_tokens
            );
        }
        Ok(response)
    }

    /// Runs a reasoning request and returns the answer plus the reasoning
    /// summary, if the service produced one.
    ///
    /// # Errors
    ///
    /// [`CompletionError::EmptyResponse`] when no answer text came back.
    pub async fn reasoning(
        &self,
        instructions: &str,
        input: &str,
        reasoning: Option<ReasoningConfig>,
    ) -> Result<(String, Option<String>), CompletionError> {
        let request = ResponsesRequest {
            model: self.model.as_str().to_string(),
            input: input.to_string(),
            instructions: Some(instructions.to_string()),
            reasoning,
            background: None,
            max_output_tokens: Some(self.model.recommended_max_tokens()),
        };

        let response = self.send_response(&request).await?;
        let (content, summary) = response.extract();

        if content.is_empty() {
            warn!("Responses call returned {} outputs but no text", response.output.len());
            return Err(CompletionError::EmptyResponse);
        }

        Ok((content, summary))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, CompletionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("No completion API key configured");
            return Err(NetworkError::Unauthorized.into());
        };

        let url = join_path(&self.base_url, path)?;
        let request = PreparedRequest::new(HttpMethod::Post, url)
            .with_bearer(api_key)
            .with_json(body)?;

        let response = execute(&self.http, request, self.timeout).await?;
        if !(200..300).contains(&response.status) {
            return Err(classify_failure(response.status, &response.body));
        }

        Ok(decode_body(&response.body)?)
    }
}
