//
//  catchtrend
//  models/minute.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Intraday minute models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinuteItem {
    /// `HH:MM` within the trading day.
    pub time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinuteData {
    pub symbol: String,

    /// Trading day, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub data: Vec<MinuteItem>,

    #[serde(default)]
    pub count: i64,

    #[serde(default)]
    pub fetch_time: String,
}

/// Body of `POST /api/v1/stocks/minute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinuteResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub minute_data: Option<MinuteData>,
}
