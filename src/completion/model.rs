//
//  catchtrend
//  completion/model.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The closed set of supported completion models and their parameters.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Temperature sent to models that accept one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// A supported completion model.
///
/// | Family | Reasoning | Temperature | Max tokens |
/// |--------|-----------|-------------|------------|
/// | o1 / o3 / o4 | yes | fixed | 25 000 |
/// | gpt-5 | yes | fixed | 10 000 |
/// | gpt-4o | no | 0.0–2.0 | 2 000 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiModel {
    O3Pro,
    O3,
    O4Mini,
    O3Mini,
    O1Preview,
    O1Mini,
    Gpt5,
    #[default]
    Gpt5Mini,
    Gpt5Nano,
    Gpt4o,
    Gpt4oMini,
}

/// Returned when a model name is not one of [`AiModel::ALL`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown model '{0}'")]
pub struct UnknownModel(pub String);

impl AiModel {
    pub const ALL: [AiModel; 11] = [
        Self::O3Pro,
        Self::O3,
        Self::O4Mini,
        Self::O3Mini,
        Self::O1Preview,
        Self::O1Mini,
        Self::Gpt5,
        Self::Gpt5Mini,
        Self::Gpt5Nano,
        Self::Gpt4o,
        Self::Gpt4oMini,
    ];

    /// The model identifier sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::O3Pro => "o3-pro",
            Self::O3 => "o3",
            Self::O4Mini => "o4-mini",
            Self::O3Mini => "o3-mini",
            Self::O1Preview => "o1-preview",
            Self::O1Mini => "o1-mini",
            Self::Gpt5 => "gpt-5",
            Self::Gpt5Mini => "gpt-5-mini",
            Self::Gpt5Nano => "gpt-5-nano",
            Self::Gpt4o => "gpt-4o",
            Self::Gpt4oMini => "gpt-4o-mini",
        }
    }

    /// Whether the model spends hidden reasoning tokens before answering.
    pub fn is_reasoning_model(&self) -> bool {
        !matches!(self, Self::Gpt4o | Self::Gpt4oMini)
    }

    /// The o-series rejects the `system` role in chat completions.
    pub fn rejects_system_role(&self) -> bool {
        ["o1", "o3", "o4"]
            .iter()
            .any(|prefix| self.as_str().starts_with(prefix))
    }

    /// Output token budget to request.
    pub fn recommended_max_tokens(&self) -> u32 {
        match self {
            Self::O3Pro | Self::O3 | Self::O4Mini | Self::O3Mini | Self::O1Preview | Self::O1Mini => {
                25_000
            }
            Self::Gpt5 | Self::Gpt5Mini | Self::Gpt5Nano => 10_000,
            Self::Gpt4o | Self::Gpt4oMini => 2_000,
        }
    }

    /// Whether a custom `temperature` may be sent.
    pub fn supports_temperature(&self) -> bool {
        matches!(self, Self::Gpt4o | Self::Gpt4oMini)
    }

    /// The temperature to send, if any.
    pub fn temperature(&self) -> Option<f64> {
        self.supports_temperature().then_some(DEFAULT_TEMPERATURE)
    }
}

impl fmt::Display for AiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiModel {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}
