//! Entity models
//!
//! One file per entity, mirroring the relational sales dataset:
//! catalog reference data, orders and their line items, payments,
//! shippings, and warehouse inventory.

mod category;
mod customer;
mod inventory;
mod order;
mod payment;
mod product;
mod seller;
mod shipping;

pub use category::Category;
pub use customer::Customer;
pub use inventory::{InventoryRecord, RestockEvent};
pub use order::{Order, OrderItem, OrderStatus};
pub use payment::{Payment, PaymentStatus};
pub use product::Product;
pub use seller::Seller;
pub use shipping::{DeliveryStatus, Shipping};
