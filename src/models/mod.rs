//
//  catchtrend
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Models
//!
//! Typed payloads of the CatchTrend backend. Wire field names are
//! snake_case, matching the Rust field names, so every struct derives serde
//! without renames.
//!
//! Optional wire fields decode to `None` when absent and list fields decode
//! to an empty `Vec`, so a sparse payload still yields a usable value.
//!
//! - [`auth`]: login response
//! - [`kline`]: candlestick series
//! - [`minute`]: intraday minute series
//! - [`realtime`]: real-time quotes
//! - [`comprehensive`]: all of the above for one symbol
//! - [`analysis`]: CONL intraday analysis

pub mod analysis;
pub mod auth;
pub mod comprehensive;
pub mod kline;
pub mod minute;
pub mod realtime;

pub use analysis::{ConlAnalysisResponse, Narrative, TradingSummary, TradingUnit};
pub use auth::LoginResponse;
pub use comprehensive::{ComprehensiveData, ComprehensiveResponse};
pub use kline::{KLineData, KLineItem, KLineResponse};
pub use minute::{MinuteData, MinuteItem, MinuteResponse};
pub use realtime::{RealTimeData, RealTimeResponse};
