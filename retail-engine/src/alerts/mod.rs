//! AlertEngine - threshold evaluation over analytics primitives
//!
//! Same snapshot-read discipline as the analytics engine: one read guard
//! per call, deterministic ordering, total over degenerate inputs (zero
//! payments yields a 0% rate, never an error).

use crate::catalog::Catalog;
use crate::inventory::InventoryLedger;
use crate::money;
use crate::store::OrderStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::PaymentStatus;
use shared::types::{OrderId, ProductId, WarehouseId};
use std::sync::Arc;

/// Stock level below which a low-stock alert fires
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Days between order and shipping beyond which a delay alert fires
pub const DEFAULT_SHIPPING_DELAY_DAYS: i64 = 5;

/// Row of `low_stock_alerts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowStockRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub warehouse_id: WarehouseId,
    pub stock: i64,
    pub last_restock: Option<NaiveDate>,
}

/// Row of `shipping_delay_alerts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingDelayRow {
    pub order_id: OrderId,
    pub provider: String,
    pub order_date: NaiveDate,
    pub shipping_date: NaiveDate,
    pub delay_days: i64,
}

/// Threshold evaluation over inventory, shippings, and payments
#[derive(Debug, Clone)]
pub struct AlertEngine {
    catalog: Arc<Catalog>,
    store: Arc<OrderStore>,
    ledger: Arc<InventoryLedger>,
}

impl AlertEngine {
    pub fn new(catalog: Arc<Catalog>, store: Arc<OrderStore>, ledger: Arc<InventoryLedger>) -> Self {
        Self {
            catalog,
            store,
            ledger,
        }
    }

    /// Inventory records with stock < `threshold`, ascending by stock;
    /// ties by ascending (product, warehouse)
    pub fn low_stock_alerts(&self, threshold: i64) -> Vec<LowStockRow> {
        let mut rows: Vec<LowStockRow> = self
            .ledger
            .records()
            .into_iter()
            .filter(|r| r.stock < threshold)
            .map(|r| LowStockRow {
                product_id: r.product,
                product_name: self
                    .catalog
                    .product(r.product)
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                warehouse_id: r.warehouse,
                stock: r.stock,
                last_restock: r.last_restock,
            })
            .collect();
        rows.sort_by_key(|r| (r.stock, r.product_id, r.warehouse_id));
        rows
    }

    /// Orders whose shipment left more than `threshold_days` after the
    /// order date, descending by delay; ties by ascending order id
    pub fn shipping_delay_alerts(&self, threshold_days: i64) -> Vec<ShippingDelayRow> {
        let data = self.store.read();
        let mut rows: Vec<ShippingDelayRow> = data
            .shippings
            .iter()
            .filter_map(|shipping| {
                let order = data.orders.get(&shipping.order)?;
                let delay_days = (shipping.shipping_date - order.date).num_days();
                if delay_days <= threshold_days {
                    return None;
                }
                Some(ShippingDelayRow {
                    order_id: order.id,
                    provider: shipping.provider.clone(),
                    order_date: order.date,
                    shipping_date: shipping.shipping_date,
                    delay_days,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.delay_days.cmp(&a.delay_days).then(a.order_id.cmp(&b.order_id)));
        rows
    }

    /// Percentage of payments with status Success over all payments;
    /// 0 when there are no payments
    pub fn payment_success_rate(&self) -> f64 {
        let data = self.store.read();
        let total = data.payments.len();
        let success = data
            .payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Success)
            .count();
        money::ratio_percent(Decimal::from(success as u64), Decimal::from(total as u64))
            .unwrap_or(0.0)
    }
}
