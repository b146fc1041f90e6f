//! Order Model

use crate::types::{CustomerId, OrderId, OrderItemId, ProductId, SellerId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// Orders are created as `Pending` by the sale transaction processor;
/// later transitions come from external fulfillment events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Returned,
    Cancelled,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    /// Customer reference
    pub customer: CustomerId,
    /// Seller reference
    pub seller: SellerId,
    pub status: OrderStatus,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    /// Order reference
    pub order: OrderId,
    /// Product reference
    pub product: ProductId,
    /// Always > 0
    pub quantity: i32,
    /// Unit price captured at the time of sale
    pub price_per_unit: f64,
}
