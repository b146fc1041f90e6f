//! Common id types for the shared crate

/// Customer id
pub type CustomerId = i64;
/// Seller id
pub type SellerId = i64;
/// Category id
pub type CategoryId = i64;
/// Product id
pub type ProductId = i64;
/// Order id (assigned by the sale transaction processor or ingestion)
pub type OrderId = i64;
/// Order line item id
pub type OrderItemId = i64;
/// Payment id
pub type PaymentId = i64;
/// Shipping id
pub type ShippingId = i64;
/// Inventory record id
pub type InventoryId = i64;
/// Warehouse id
pub type WarehouseId = i64;
