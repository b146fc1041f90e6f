//! RetailCore - ingestion and component wiring
//!
//! Builds the catalog, inventory ledger, order store, and the three
//! engines from one ingested dataset. Everything downstream assumes
//! referential integrity, so ingestion is where foreign keys and the
//! structural invariants are checked.

use crate::alerts::AlertEngine;
use crate::analytics::AnalyticsEngine;
use crate::catalog::Catalog;
use crate::inventory::{InventoryLedger, NegativeDelta};
use crate::sales::SalesManager;
use crate::store::OrderStore;
use shared::models::{
    Category, Customer, InventoryRecord, Order, OrderItem, Payment, Product, RestockEvent, Seller,
    Shipping,
};
use shared::types::{
    CategoryId, CustomerId, InventoryId, OrderId, OrderItemId, PaymentId, ProductId, SellerId,
    ShippingId,
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Ingestion input: the full relational sales dataset
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub sellers: Vec<Seller>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
    pub shippings: Vec<Shipping>,
    pub inventory: Vec<InventoryRecord>,
}

/// Referential or structural violation found at ingestion
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    #[error("order {order_id} references unknown customer {customer_id}")]
    UnknownCustomer {
        order_id: OrderId,
        customer_id: CustomerId,
    },

    #[error("order {order_id} references unknown seller {seller_id}")]
    UnknownSeller {
        order_id: OrderId,
        seller_id: SellerId,
    },

    #[error("order item {item_id} references unknown order {order_id}")]
    UnknownOrderForItem {
        item_id: OrderItemId,
        order_id: OrderId,
    },

    #[error("order item {item_id} references unknown product {product_id}")]
    UnknownProduct {
        item_id: OrderItemId,
        product_id: ProductId,
    },

    #[error("product {0} has a non-finite price or cogs")]
    NonFiniteProductPrice(ProductId),

    #[error("order item {item_id} has non-positive quantity {quantity}")]
    NonPositiveQuantity { item_id: OrderItemId, quantity: i32 },

    #[error("order item {0} has a non-finite unit price")]
    NonFiniteUnitPrice(OrderItemId),

    #[error("order {0} has no line items")]
    EmptyOrder(OrderId),

    #[error("payment {payment_id} references unknown order {order_id}")]
    UnknownOrderForPayment {
        payment_id: PaymentId,
        order_id: OrderId,
    },

    #[error("shipping {shipping_id} references unknown order {order_id}")]
    UnknownOrderForShipping {
        shipping_id: ShippingId,
        order_id: OrderId,
    },

    #[error("inventory record {inventory_id} references unknown product {product_id}")]
    UnknownProductForInventory {
        inventory_id: InventoryId,
        product_id: ProductId,
    },

    #[error("inventory record {inventory_id} has negative stock {stock}")]
    NegativeStock { inventory_id: InventoryId, stock: i64 },
}

/// Why a restock event was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RestockError {
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error(transparent)]
    NegativeDelta(#[from] NegativeDelta),
}

/// The wired core: one catalog, one ledger, one order store, three engines
#[derive(Debug)]
pub struct RetailCore {
    pub catalog: Arc<Catalog>,
    pub ledger: Arc<InventoryLedger>,
    pub store: Arc<OrderStore>,
    pub sales: SalesManager,
    pub analytics: AnalyticsEngine,
    pub alerts: AlertEngine,
}

impl RetailCore {
    pub fn new(dataset: Dataset) -> Result<Self, DatasetError> {
        validate(&dataset)?;

        let Dataset {
            customers,
            sellers,
            categories,
            products,
            orders,
            order_items,
            payments,
            shippings,
            inventory,
        } = dataset;

        let catalog = Arc::new(Catalog::new(customers, sellers, categories, products));
        let ledger = Arc::new(InventoryLedger::new(inventory));
        let store = Arc::new(OrderStore::new(orders, order_items, payments, shippings));

        let sales = SalesManager::new(catalog.clone(), ledger.clone(), store.clone());
        let analytics = AnalyticsEngine::new(catalog.clone(), store.clone());
        let alerts = AlertEngine::new(catalog.clone(), store.clone(), ledger.clone());

        tracing::info!("retail core initialized");
        Ok(Self {
            catalog,
            ledger,
            store,
            sales,
            analytics,
            alerts,
        })
    }

    /// Apply an external restock event through the ledger's atomic path
    ///
    /// The product must exist in the catalog, keeping every ledger bin
    /// joinable back to a product the way ingestion guarantees.
    pub fn restock(&self, event: &RestockEvent) -> Result<(), RestockError> {
        if self.catalog.product(event.product).is_none() {
            return Err(RestockError::UnknownProduct(event.product));
        }
        self.ledger.restock(event)?;
        Ok(())
    }
}

fn validate(dataset: &Dataset) -> Result<(), DatasetError> {
    let categories: HashSet<CategoryId> = dataset.categories.iter().map(|c| c.id).collect();
    let customers: HashSet<CustomerId> = dataset.customers.iter().map(|c| c.id).collect();
    let sellers: HashSet<SellerId> = dataset.sellers.iter().map(|s| s.id).collect();
    let products: HashSet<ProductId> = dataset.products.iter().map(|p| p.id).collect();
    let orders: HashSet<OrderId> = dataset.orders.iter().map(|o| o.id).collect();

    for product in &dataset.products {
        if !categories.contains(&product.category) {
            return Err(DatasetError::UnknownCategory {
                product_id: product.id,
                category_id: product.category,
            });
        }
        // NaN/infinite money would silently collapse to zero in Decimal math
        if !product.price.is_finite() || !product.cogs.is_finite() {
            return Err(DatasetError::NonFiniteProductPrice(product.id));
        }
    }

    for order in &dataset.orders {
        if !customers.contains(&order.customer) {
            return Err(DatasetError::UnknownCustomer {
                order_id: order.id,
                customer_id: order.customer,
            });
        }
        if !sellers.contains(&order.seller) {
            return Err(DatasetError::UnknownSeller {
                order_id: order.id,
                seller_id: order.seller,
            });
        }
    }

    let mut orders_with_items: HashSet<OrderId> = HashSet::new();
    for item in &dataset.order_items {
        if !orders.contains(&item.order) {
            return Err(DatasetError::UnknownOrderForItem {
                item_id: item.id,
                order_id: item.order,
            });
        }
        if !products.contains(&item.product) {
            return Err(DatasetError::UnknownProduct {
                item_id: item.id,
                product_id: item.product,
            });
        }
        if item.quantity <= 0 {
            return Err(DatasetError::NonPositiveQuantity {
                item_id: item.id,
                quantity: item.quantity,
            });
        }
        if !item.price_per_unit.is_finite() {
            return Err(DatasetError::NonFiniteUnitPrice(item.id));
        }
        orders_with_items.insert(item.order);
    }
    for order in &dataset.orders {
        if !orders_with_items.contains(&order.id) {
            return Err(DatasetError::EmptyOrder(order.id));
        }
    }

    for payment in &dataset.payments {
        if !orders.contains(&payment.order) {
            return Err(DatasetError::UnknownOrderForPayment {
                payment_id: payment.id,
                order_id: payment.order,
            });
        }
    }

    for shipping in &dataset.shippings {
        if !orders.contains(&shipping.order) {
            return Err(DatasetError::UnknownOrderForShipping {
                shipping_id: shipping.id,
                order_id: shipping.order,
            });
        }
    }

    for record in &dataset.inventory {
        if !products.contains(&record.product) {
            return Err(DatasetError::UnknownProductForInventory {
                inventory_id: record.id,
                product_id: record.product,
            });
        }
        if record.stock < 0 {
            return Err(DatasetError::NegativeStock {
                inventory_id: record.id,
                stock: record.stock,
            });
        }
    }

    Ok(())
}
