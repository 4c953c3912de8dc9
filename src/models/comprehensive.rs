//
//  catchtrend
//  models/comprehensive.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Combined market data for one symbol.

use serde::{Deserialize, Serialize};

use super::kline::KLineData;
use super::minute::MinuteData;
use super::realtime::RealTimeData;

/// Every data set the backend could gather for a symbol.
///
/// Each block is independently optional: the backend fills what it could
/// fetch and lists the failures in `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveData {
    pub symbol: String,

    #[serde(default)]
    pub fetch_time: String,

    #[serde(default)]
    pub real_time: Option<RealTimeData>,

    #[serde(default)]
    pub daily_kline: Option<KLineData>,

    #[serde(default)]
    pub minute_kline: Option<KLineData>,

    #[serde(default)]
    pub minute_data: Option<MinuteData>,

    #[serde(default)]
    pub errors: Vec<String>,
}

impl ComprehensiveData {
    /// Whether every block was fetched without error.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
            && self.real_time.is_some()
            && self.daily_kline.is_some()
            && self.minute_kline.is_some()
            && self.minute_data.is_some()
    }
}

/// Body of `GET /api/v1/stocks/{symbol}/comprehensive`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub comprehensive_data: Option<ComprehensiveData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload() {
        let body = r#"{
            "success": true,
            "message": "ok",
            "timestamp": "2025-10-12T09:30:00",
            "comprehensive_data": {
                "symbol": "CONL",
                "fetch_time": "2025-10-12 09:30:00",
                "real_time": {"symbol": "CONL", "current_price": 31.2, "timestamp": "09:30"},
                "errors": ["minute data unavailable"]
            }
        }"#;
        let response: ComprehensiveResponse = serde_json::from_str(body).unwrap();
        let data = response.comprehensive_data.unwrap();
        assert_eq!(data.symbol, "CONL");
        assert!(data.daily_kline.is_none());
        assert_eq!(data.errors, vec!["minute data unavailable".to_string()]);
        assert!(!data.is_complete());
    }

    #[test]
    fn test_full_payload_survives_echo() {
        use crate::models::{KLineItem, MinuteItem};

        let candle = |datetime: &str, close: f64| KLineItem {
            datetime: datetime.to_string(),
            open: Some(30.0),
            high: Some(32.5),
            low: Some(29.75),
            close: Some(close),
            volume: Some(1_250_000),
        };
        let response = ComprehensiveResponse {
            success: true,
            message: "ok".to_string(),
            timestamp: "2025-11-07T15:30:00".to_string(),
            comprehensive_data: Some(ComprehensiveData {
                symbol: "CONL".to_string(),
                fetch_time: "2025-11-07 15:30:00".to_string(),
                real_time: Some(RealTimeData {
                    symbol: "CONL".to_string(),
                    name: "GraniteShares 2x Long COIN".to_string(),
                    open_price: Some(30.1),
                    previous_close: Some(29.8),
                    current_price: Some(31.2),
                    high_price: Some(32.0),
                    low_price: Some(29.9),
                    volume: Some(8_400_000),
                    change: Some(1.4),
                    change_percent: Some(4.7),
                    timestamp: "15:30".to_string(),
                    currency: "USD".to_string(),
                }),
                daily_kline: Some(KLineData {
                    symbol: "CONL".to_string(),
                    period: "1d".to_string(),
                    data: vec![candle("2025-11-06", 29.8), candle("2025-11-07", 31.2)],
                    count: 2,
                    fetch_time: "2025-11-07 15:30:00".to_string(),
                }),
                minute_kline: Some(KLineData {
                    symbol: "CONL".to_string(),
                    period: "1m".to_string(),
                    data: vec![KLineItem {
                        datetime: "2025-11-07 09:31:00".to_string(),
                        open: None,
                        high: None,
                        low: None,
                        close: None,
                        volume: None,
                    }],
                    count: 1,
                    fetch_time: "2025-11-07 15:30:00".to_string(),
                }),
                minute_data: Some(MinuteData {
                    symbol: "CONL".to_string(),
                    date: "2025-11-07".to_string(),
                    data: vec![MinuteItem {
                        time: "09:31".to_string(),
                        price: Some(30.4),
                        volume: Some(52_000),
                        avg_price: Some(30.25),
                    }],
                    count: 1,
                    fetch_time: "2025-11-07 15:30:00".to_string(),
                }),
                errors: vec!["premarket data unavailable".to_string()],
            }),
        };

        let bytes = serde_json::to_vec(&response).unwrap();
        let echoed: ComprehensiveResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(echoed, response);
    }
}
