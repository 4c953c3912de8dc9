//
//  catchtrend
//  cli/analysis.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CONL analysis commands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::{now_timestamp, GlobalOptions};
use crate::output::write_json;

#[derive(Args, Debug)]
pub struct AnalysisCommand {
    #[command(subcommand)]
    pub command: AnalysisSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AnalysisSubcommand {
    /// Analysis of the latest trading day
    Latest(LatestArgs),

    /// Analysis of a given trading day
    Date(DateArgs),
}

#[derive(Args, Debug)]
pub struct LatestArgs {
    /// K-line granularity the analysis is built from
    #[arg(long, default_value = "1min")]
    pub kline_type: String,

    /// Include broader market context
    #[arg(long)]
    pub market_context: bool,
}

#[derive(Args, Debug)]
pub struct DateArgs {
    /// Trading day, YYYY-MM-DD
    #[arg(value_parser = parse_date)]
    pub date: NaiveDate,

    #[arg(long)]
    pub market_context: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("'{}' is not a YYYY-MM-DD date", value))
}

impl AnalysisCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.api_client()?;

        let response = match &self.command {
            AnalysisSubcommand::Latest(args) => {
                client
                    .get_conl_analysis_latest(
                        &args.kline_type,
                        args.market_context,
                        Some(now_timestamp()),
                    )
                    .await?
            }
            AnalysisSubcommand::Date(args) => {
                let date = args.date.format("%Y-%m-%d").to_string();
                client
                    .get_conl_analysis_by_date(&date, args.market_context, Some(now_timestamp()))
                    .await?
            }
        };

        write_json(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-11-07").unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 7).unwrap()
        );
        assert!(parse_date("07/11/2025").is_err());
        assert!(parse_date("../latest").is_err());
    }
}
