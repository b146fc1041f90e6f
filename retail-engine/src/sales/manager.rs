//! SalesManager - the atomic "record sale" transaction
//!
//! # Transaction Flow
//!
//! ```text
//! record_sale(customer, seller, lines)
//!     ├─ 1. Validate every reference and quantity (no mutation)
//!     ├─ 2. Capture current unit prices from the catalog
//!     ├─ 3. Atomic check-and-decrement of every line on the ledger
//!     ├─ 4. Append order (Pending) + line items to the store
//!     └─ 5. Return the generated order id
//! ```
//!
//! Steps 1-3 fail fast with no partial effect; step 4 is an in-memory
//! append that cannot fail once stock is secured. The decremented stock is
//! visible to any read that starts after step 3 commits.

use super::error::{SaleError, ValidationError};
use crate::catalog::Catalog;
use crate::inventory::InventoryLedger;
use crate::store::OrderStore;
use chrono::{NaiveDate, Utc};
use shared::types::{CustomerId, OrderId, ProductId, SellerId};
use std::sync::Arc;

/// One requested line of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleLine {
    pub product: ProductId,
    pub quantity: i32,
}

impl SaleLine {
    pub fn new(product: ProductId, quantity: i32) -> Self {
        Self { product, quantity }
    }
}

/// Composes order creation with the atomic inventory decrement
#[derive(Debug, Clone)]
pub struct SalesManager {
    catalog: Arc<Catalog>,
    ledger: Arc<InventoryLedger>,
    store: Arc<OrderStore>,
}

impl SalesManager {
    pub fn new(catalog: Arc<Catalog>, ledger: Arc<InventoryLedger>, store: Arc<OrderStore>) -> Self {
        Self {
            catalog,
            ledger,
            store,
        }
    }

    /// Record a sale dated today (UTC)
    pub fn record_sale(
        &self,
        customer: CustomerId,
        seller: SellerId,
        lines: &[SaleLine],
    ) -> Result<OrderId, SaleError> {
        self.record_sale_dated(Utc::now().date_naive(), customer, seller, lines)
    }

    /// Record a sale with an explicit business date
    pub fn record_sale_dated(
        &self,
        date: NaiveDate,
        customer: CustomerId,
        seller: SellerId,
        lines: &[SaleLine],
    ) -> Result<OrderId, SaleError> {
        // Phase 1: validate everything before touching any state,
        // capturing current unit prices along the way
        let captured = self.validate(customer, seller, lines)?;

        // Phase 2: secure stock atomically across all lines
        let demand: Vec<(ProductId, i64)> = captured
            .iter()
            .map(|&(product, quantity, _)| (product, i64::from(quantity)))
            .collect();
        if let Err(oos) = self.ledger.try_decrement(&demand) {
            tracing::warn!(
                customer_id = customer,
                product_id = oos.product_id,
                requested = oos.requested,
                available = oos.available,
                "sale rejected: out of stock"
            );
            return Err(oos.into());
        }

        // Stock is secured; the append cannot fail
        let order_id = self.store.append_sale(date, customer, seller, &captured);
        tracing::info!(
            order_id,
            customer_id = customer,
            seller_id = seller,
            lines = lines.len(),
            "sale committed"
        );
        Ok(order_id)
    }

    /// Resolve references and quantities; returns (product, quantity, unit price)
    fn validate(
        &self,
        customer: CustomerId,
        seller: SellerId,
        lines: &[SaleLine],
    ) -> Result<Vec<(ProductId, i32, f64)>, ValidationError> {
        if lines.is_empty() {
            return Err(ValidationError::EmptyLines);
        }
        if self.catalog.customer(customer).is_none() {
            return Err(ValidationError::UnknownCustomer(customer));
        }
        if self.catalog.seller(seller).is_none() {
            return Err(ValidationError::UnknownSeller(seller));
        }

        let mut captured = Vec::with_capacity(lines.len());
        for line in lines {
            if line.quantity <= 0 {
                return Err(ValidationError::NonPositiveQuantity {
                    product_id: line.product,
                    quantity: line.quantity,
                });
            }
            let product = self
                .catalog
                .product(line.product)
                .ok_or(ValidationError::UnknownProduct(line.product))?;
            captured.push((line.product, line.quantity, product.price));
        }
        Ok(captured)
    }
}
