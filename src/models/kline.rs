//
//  catchtrend
//  models/kline.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! K-line (candlestick) models.

use serde::{Deserialize, Serialize};

/// One candle. Price and volume fields are absent for halted intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KLineItem {
    pub datetime: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
}

/// A candle series for one symbol and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KLineData {
    pub symbol: String,

    /// Period such as `"1d"` or `"5m"`.
    pub period: String,

    #[serde(default)]
    pub data: Vec<KLineItem>,

    #[serde(default)]
    pub count: i64,

    #[serde(default)]
    pub fetch_time: String,
}

impl KLineData {
    /// The most recent candle with a closing price.
    pub fn last_close(&self) -> Option<f64> {
        self.data.iter().rev().find_map(|item| item.close)
    }
}

/// Body of `POST /api/v1/stocks/kline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KLineResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub kline_data: Option<KLineData>,
}
