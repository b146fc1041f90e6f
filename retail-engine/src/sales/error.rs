//! Sale transaction errors

use crate::inventory::OutOfStock;
use shared::types::{CustomerId, ProductId, SellerId};
use thiserror::Error;

/// Structural/referential violations, caught before any write
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown customer: {0}")]
    UnknownCustomer(CustomerId),

    #[error("unknown seller: {0}")]
    UnknownSeller(SellerId),

    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("quantity must be positive for product {product_id}, got {quantity}")]
    NonPositiveQuantity {
        product_id: ProductId,
        quantity: i32,
    },

    #[error("a sale needs at least one line")]
    EmptyLines,
}

/// Why a `record_sale` call was rejected
///
/// Either way the guarantee is the same: no order, no line items, no stock
/// mutation was committed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    OutOfStock(#[from] OutOfStock),
}
