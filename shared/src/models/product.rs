//! Product Model

use crate::types::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Current list price in currency units
    pub price: f64,
    /// Cost of goods sold per unit
    pub cogs: f64,
    /// Category reference
    pub category: CategoryId,
}
