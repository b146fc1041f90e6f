//! Retail operations analytics and inventory-consistency engine
//!
//! Core pieces:
//! - [`sales::SalesManager`]: the atomic "record sale" transaction — one
//!   order plus its line items plus the matching stock decrements commit as
//!   a single all-or-nothing unit, safe under concurrent callers.
//! - [`inventory::InventoryLedger`]: the only shared mutable state; every
//!   stock mutation goes through an atomic check-and-decrement (or restock
//!   increment) on the same lock.
//! - [`analytics::AnalyticsEngine`]: pure snapshot reads producing ranked
//!   and aggregated business metrics.
//! - [`alerts::AlertEngine`]: threshold evaluation built on the same
//!   snapshot primitives.
//!
//! [`state::RetailCore`] wires everything together from an ingested
//! [`state::Dataset`].

pub mod alerts;
pub mod analytics;
pub mod catalog;
pub mod inventory;
pub mod logging;
pub mod money;
pub mod sales;
pub mod state;
pub mod store;

pub use state::{Dataset, DatasetError, RestockError, RetailCore};
