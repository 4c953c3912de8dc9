//
//  catchtrend
//  cli/stock.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Market-data commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{now_timestamp, GlobalOptions};
use crate::output::write_json;

#[derive(Args, Debug)]
pub struct StockCommand {
    #[command(subcommand)]
    pub command: StockSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StockSubcommand {
    /// Quote, K-lines and intraday data in one call
    Comprehensive(ComprehensiveArgs),

    /// Candlestick series
    Kline(KLineArgs),

    /// Intraday minute series
    Minute(MinuteArgs),

    /// Real-time quotes for one or more symbols
    Realtime(RealtimeArgs),
}

#[derive(Args, Debug)]
pub struct ComprehensiveArgs {
    /// Ticker symbol, e.g. CONL
    pub symbol: String,

    /// Cache-busting timestamp; omitted when not given
    #[arg(long)]
    pub timestamp: Option<i64>,
}

#[derive(Args, Debug)]
pub struct KLineArgs {
    pub symbol: String,

    /// Candle period, e.g. 1d, 1h, 5m
    #[arg(long, short = 'p', default_value = "1d")]
    pub period: String,

    /// Number of candles
    #[arg(long, short = 'n', default_value_t = 100)]
    pub count: u32,
}

#[derive(Args, Debug)]
pub struct MinuteArgs {
    pub symbol: String,

    /// Trading day (YYYY-MM-DD); defaults to the latest
    #[arg(long, short = 'd')]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct RealtimeArgs {
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}

impl StockCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.api_client()?;

        match &self.command {
            StockSubcommand::Comprehensive(args) => {
                let response = client
                    .get_comprehensive_data(&args.symbol, args.timestamp)
                    .await?;
                write_json(&response)
            }
            StockSubcommand::Kline(args) => {
                let response = client
                    .get_kline(&args.symbol, &args.period, args.count, now_timestamp())
                    .await?;
                write_json(&response)
            }
            StockSubcommand::Minute(args) => {
                let response = client
                    .get_minute(&args.symbol, args.date.as_deref(), now_timestamp())
                    .await?;
                write_json(&response)
            }
            StockSubcommand::Realtime(args) => {
                let symbols: Vec<String> = args.symbols.iter().map(|s| s.to_uppercase()).collect();
                let response = client.get_realtime(&symbols, now_timestamp()).await?;
                write_json(&response)
            }
        }
    }
}
