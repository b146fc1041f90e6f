//! Sale transaction processing

mod error;
mod manager;

pub use error::{SaleError, ValidationError};
pub use manager::{SaleLine, SalesManager};
