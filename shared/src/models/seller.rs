//! Seller Model

use crate::types::SellerId;
use serde::{Deserialize, Serialize};

/// Seller entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    /// Country or region the seller operates from
    pub origin: String,
}
