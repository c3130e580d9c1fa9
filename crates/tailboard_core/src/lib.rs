//! Monte Carlo scenario engine for the tailboard dashboards.
//!
//! Everything here is synchronous and single-threaded. One dashboard
//! interaction maps to one pipeline call: validate the scenario
//! parameters, draw fresh variate arrays, compose them element-wise
//! into derived quantities, and hand finished distributions to a
//! [`DistributionSink`] for display.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod compose;
pub mod error;
pub mod pipeline;
pub mod sample;
pub mod scenario;
pub mod sink;
pub mod stats;
pub mod variates;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports
// ============================================================================

pub use error::{ModelError, Result};
pub use sample::Distribution;
pub use sink::{DistributionSink, NullSink};
pub use variates::Variates;
