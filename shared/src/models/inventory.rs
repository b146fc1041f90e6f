//! Inventory Model

use crate::types::{InventoryId, ProductId, WarehouseId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-product, per-warehouse stock record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryRecord {
    pub id: InventoryId,
    /// Product reference
    pub product: ProductId,
    pub warehouse: WarehouseId,
    /// Always ≥ 0
    pub stock: i64,
    pub last_restock: Option<NaiveDate>,
}

/// Restock delivery from an external collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockEvent {
    pub product: ProductId,
    pub warehouse: WarehouseId,
    /// Units added, ≥ 0
    pub delta: i64,
    pub date: NaiveDate,
}
