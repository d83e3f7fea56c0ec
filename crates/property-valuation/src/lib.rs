//! Valuation and investment metrics for residential property reports.
//!
//! The [`valuation`] module holds the pure calculators; [`intake`] turns loosely
//! typed market data into the typed records they consume.

pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
pub mod valuation;
