use super::PathOrStd;
use clap::{Args, Subcommand};
use fpa_core::{analytics::PriceAnalytics, models::Pagination};
use fpa_sqlite::Db;
use serde_json::Value;
use time::Date;

mod dates;
mod import;

pub use dates::parse_date;
pub use import::{ImportSummary, read_records};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a JSON array of price records
    ///
    /// Without a configured `database.database_path` the store is in memory
    /// and the records are gone once the command exits.
    Import {
        /// The records file ("-" implies stdin)
        #[arg(value_parser = clap::value_parser!(PathOrStd))]
        input: PathOrStd,
    },

    /// The newest record per state, or the newest record matching a filter
    Current {
        #[arg(short, long)]
        state: Option<String>,

        #[arg(short, long)]
        region: Option<String>,
    },

    /// A single record by id
    Get { id: i64 },

    /// One product's prices up to a date, oldest first
    History {
        /// One of pms, ago, dpk, lpg
        product: String,

        #[command(flatten)]
        period: PeriodArg,

        /// Keep only this many of the newest records
        #[arg(short, long)]
        duration: Option<usize>,

        #[arg(short, long)]
        state: Option<String>,
    },

    /// Price movement per state over the newest records up to a date
    Performance {
        #[command(flatten)]
        period: PeriodArg,

        /// The number of records compared (at least 2)
        #[arg(short, long, default_value_t = 2)]
        duration: usize,

        /// Restrict to one state (all states if omitted)
        #[arg(short, long, default_value = "")]
        state: String,

        /// Restrict to one product (all products if omitted)
        #[arg(short, long)]
        product: Option<String>,
    },

    /// Price movement of one product in one state across a calendar week
    Weekly {
        /// One of pms, ago, dpk, lpg
        product: String,

        #[arg(short, long)]
        state: String,

        /// The week number, counted from January 1st
        #[arg(short, long)]
        week: i64,

        #[arg(short, long)]
        year: i64,
    },

    /// A page of records in insertion order
    List {
        #[arg(short, long)]
        state: Option<String>,

        #[arg(short, long)]
        region: Option<String>,

        #[command(flatten)]
        page: PageArg,
    },

    /// A page of the records of exactly one state
    Search {
        query: String,

        #[command(flatten)]
        page: PageArg,
    },

    /// The number of records matching a filter
    Count {
        #[arg(short, long)]
        state: Option<String>,

        #[arg(short, long)]
        region: Option<String>,
    },
}

/// The reference date of a query.
#[derive(Args, Debug, Clone, Copy)]
pub struct PeriodArg {
    /// YYYY-MM-DD, today (UTC) if omitted
    #[arg(long, value_parser = parse_date)]
    pub period: Option<Date>,
}

impl PeriodArg {
    pub fn or_today(self) -> Date {
        self.period
            .unwrap_or_else(|| time::OffsetDateTime::now_utc().date())
    }
}

/// A 1-based page of results.
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArg {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl Commands {
    /// Whether the command writes to the store.
    pub fn is_write(&self) -> bool {
        matches!(self, Commands::Import { .. })
    }

    /// Execute the command and return its report.
    pub async fn run(self, analytics: &PriceAnalytics<Db>) -> anyhow::Result<Value> {
        let report = match self {
            Commands::Import { input } => {
                let records = read_records(input.read()?)?;
                serde_json::to_value(import::import(analytics, records).await?)?
            }
            Commands::Current { state, region } => serde_json::to_value(
                analytics
                    .current_price(region.as_deref(), state.as_deref())
                    .await?,
            )?,
            Commands::Get { id } => serde_json::to_value(analytics.price_by_id(id).await?)?,
            Commands::History {
                product,
                period,
                duration,
                state,
            } => serde_json::to_value(
                analytics
                    .history(&product, period.or_today(), duration, state.as_deref())
                    .await?,
            )?,
            Commands::Performance {
                period,
                duration,
                state,
                product,
            } => serde_json::to_value(
                analytics
                    .performance(period.or_today(), duration, &state, product.as_deref())
                    .await?,
            )?,
            Commands::Weekly {
                product,
                state,
                week,
                year,
            } => serde_json::to_value(
                analytics
                    .weekly_report(&product, &state, week, year)
                    .await?,
            )?,
            Commands::List {
                state,
                region,
                page,
            } => serde_json::to_value(
                analytics
                    .list_prices(
                        state.as_deref(),
                        region.as_deref(),
                        Pagination::from_page(page.page)?,
                    )
                    .await?,
            )?,
            Commands::Search { query, page } => serde_json::to_value(
                analytics
                    .search(&query, Pagination::from_page(page.page)?)
                    .await?,
            )?,
            Commands::Count { state, region } => serde_json::to_value(
                analytics
                    .count_prices(state.as_deref(), region.as_deref())
                    .await?,
            )?,
        };

        Ok(report)
    }
}
