#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the fpa-core crate.
//! [fpa_core]: https://docs.rs/fpa_core/latest/fpa_core/index.html
//! [fpa_sqlite]: https://docs.rs/fpa_sqlite/latest/fpa_sqlite/index.html
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for fuel price reporting.
///
/// This module contains the price record, the closed set of product tags,
/// the filters and pagination every store must understand, and the shapes
/// returned by the analytics operations.
///
/// The models are plain data with a small amount of validation logic. They
/// carry no knowledge of how a store persists or scans them.
pub mod models;

/// Interface traits for price stores.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the queries the analytics engine issues and the shape
/// of what comes back, without prescribing how a store executes them. Any
/// store that can filter, sort and group by state can implement them.
pub mod ports;

/// The price analytics query engine.
///
/// [`PriceAnalytics`](analytics::PriceAnalytics) turns the flat records a
/// [`PriceRepository`](ports::PriceRepository) returns into snapshots,
/// bounded histories, performance deltas and weekly reports.
pub mod analytics;

/// Resolution of (week, year) pairs into calendar windows.
pub mod week;
