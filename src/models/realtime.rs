//
//  catchtrend
//  models/realtime.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Real-time quote models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A quote snapshot for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimeData {
    pub symbol: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub open_price: Option<f64>,

    #[serde(default)]
    pub previous_close: Option<f64>,

    #[serde(default)]
    pub current_price: Option<f64>,

    #[serde(default)]
    pub high_price: Option<f64>,

    #[serde(default)]
    pub low_price: Option<f64>,

    #[serde(default)]
    pub volume: Option<i64>,

    /// Absolute change against the previous close.
    #[serde(default)]
    pub change: Option<f64>,

    /// Percentage change against the previous close.
    #[serde(default)]
    pub change_percent: Option<f64>,

    #[serde(default)]
    pub timestamp: String,

    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Body of `POST /api/v1/stocks/realtime`, keyed by symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimeResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub real_time_data: HashMap<String, RealTimeData>,
}
