//! Customer Model

use crate::types::CustomerId;
use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// State / region used for geographic aggregation
    pub state: String,
    /// May be a placeholder when the real address is unknown, never empty
    pub address: String,
}
