//
//  catchtrend
//  models/analysis.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CONL Analysis Models
//!
//! The intraday price/volume analysis served under `/api/v1/analyze/conl`.
//! A day is summarized once ([`TradingSummary`]), narrated per session
//! ([`Narrative`]) and broken down into time slices ([`TradingUnit`]).

use serde::{Deserialize, Serialize};

/// Body of the latest / by-date analysis operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConlAnalysisResponse {
    /// Trading day, `YYYY-MM-DD`.
    pub date: String,

    pub summary: TradingSummary,

    #[serde(default)]
    pub narrative: Option<Narrative>,

    #[serde(default)]
    pub units: Vec<TradingUnit>,
}

/// Day-level figures. Percentages are relative to `prev_close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSummary {
    pub open: f64,
    pub close: f64,
    pub prev_close: f64,
    pub day_high: f64,
    pub day_high_pct: f64,
    pub gap_open_pct: f64,
    pub close_change_pct: f64,

    /// Human-readable summary.
    #[serde(default)]
    pub text: String,
}

/// Free-text commentary per trading session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    #[serde(default)]
    pub early: Option<String>,

    #[serde(default)]
    pub midday: Option<String>,

    #[serde(default)]
    pub afternoon: Option<String>,

    #[serde(default)]
    pub closing: Option<String>,
}

impl Narrative {
    /// Sessions that carry text, in chronological order.
    pub fn sessions(&self) -> Vec<(&'static str, &str)> {
        [
            ("early", &self.early),
            ("midday", &self.midday),
            ("afternoon", &self.afternoon),
            ("closing", &self.closing),
        ]
        .into_iter()
        .filter_map(|(name, text)| text.as_deref().map(|t| (name, t)))
        .collect()
    }
}

/// One time slice of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingUnit {
    pub index: i64,
    pub time: String,
    pub price_from: f64,
    pub price_to: f64,
    pub price_change_pct: f64,
    pub volume_change_pct: f64,

    /// Price/volume relationship label, e.g. rising on shrinking volume.
    pub relationship: String,

    #[serde(default)]
    pub relationship_desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "date": "2025-11-07",
        "summary": {
            "open": 30.0, "close": 31.5, "prev_close": 29.8, "day_high": 32.0,
            "day_high_pct": 7.38, "gap_open_pct": 0.67, "close_change_pct": 5.7,
            "text": "Gap up, strong close"
        },
        "narrative": {"early": "Opened firm", "closing": "Held gains"},
        "units": [
            {"index": 0, "time": "09:30", "price_from": 30.0, "price_to": 30.6,
             "price_change_pct": 2.0, "volume_change_pct": -12.5,
             "relationship": "shrink_up", "relationship_desc": "rising on lower volume"}
        ]
    }"#;

    #[test]
    fn test_decode() {
        let analysis: ConlAnalysisResponse = serde_json::from_str(BODY).unwrap();
        assert_eq!(analysis.date, "2025-11-07");
        assert_eq!(analysis.summary.prev_close, 29.8);
        assert_eq!(analysis.units.len(), 1);
        assert_eq!(analysis.units[0].relationship, "shrink_up");
    }

    #[test]
    fn test_narrative_sessions_skip_missing() {
        let analysis: ConlAnalysisResponse = serde_json::from_str(BODY).unwrap();
        let narrative = analysis.narrative.unwrap();
        assert_eq!(
            narrative.sessions(),
            vec![("early", "Opened firm"), ("closing", "Held gains")]
        );
    }

    #[test]
    fn test_units_default_empty() {
        let body = r#"{"date":"2025-11-07","summary":{"open":1,"close":1,"prev_close":1,
            "day_high":1,"day_high_pct":0,"gap_open_pct":0,"close_change_pct":0}}"#;
        let analysis: ConlAnalysisResponse = serde_json::from_str(body).unwrap();
        assert!(analysis.units.is_empty());
        assert!(analysis.narrative.is_none());
    }
}
