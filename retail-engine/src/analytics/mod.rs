//! Analytics engine - stateless snapshot reads
//!
//! Every query is a pure read over one consistent snapshot of the order
//! store and catalog, with deterministic row ordering.

mod engine;
mod rank;
mod rows;

pub use engine::AnalyticsEngine;
pub use rank::competition_ranks;
pub use rows::*;
