//! Repository trait implementations for the SQLite database.
//!
//! This module contains the implementations of the price store traits defined
//! in `fpa-core` for the SQLite database backend.

use crate::{Db, types::DateTime};
use fpa_core::{models::PriceFilter, ports::Repository};
use sqlx::{QueryBuilder, Sqlite};

mod ingest;
mod price;

impl Repository for Db {
    type Error = sqlx::Error;
}

/// Append the `where` clause selecting the records that match `filter`.
fn push_filter<'args>(builder: &mut QueryBuilder<'args, Sqlite>, filter: &PriceFilter) {
    builder.push(" where 1 = 1");
    if let Some(pattern) = filter.state_pattern() {
        builder.push(" and state regexp ").push_bind(pattern);
    }
    if let Some(pattern) = filter.region_pattern() {
        builder.push(" and region regexp ").push_bind(pattern);
    }
    if let Some(bound) = filter.on_or_after {
        builder.push(" and period >= ").push_bind(DateTime::from(bound));
    }
    if let Some(bound) = filter.on_or_before {
        builder.push(" and period <= ").push_bind(DateTime::from(bound));
    }
}

/// SQLite binds signed integers only; anything larger is as good as unbounded.
fn to_sql_count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
