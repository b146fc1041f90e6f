//! OrderStore - orders, line items, payments, and shippings
//!
//! One `RwLock` guards the whole relation set, so a single read guard gives
//! analytics and alerting a consistent snapshot across every join for the
//! duration of one call (no torn reads). Writes come from the sale
//! transaction processor appending a committed sale.

use chrono::NaiveDate;
use parking_lot::{RwLock, RwLockReadGuard};
use shared::models::{Order, OrderItem, OrderStatus, Payment, Shipping};
use shared::types::{CustomerId, OrderId, ProductId, SellerId};
use std::collections::BTreeMap;

/// Relation snapshot guarded by the store lock
#[derive(Debug, Default)]
pub struct StoreInner {
    pub orders: BTreeMap<OrderId, Order>,
    /// Line items grouped by order; every order has at least one
    pub items_by_order: BTreeMap<OrderId, Vec<OrderItem>>,
    pub payments: Vec<Payment>,
    pub shippings: Vec<Shipping>,
    next_order_id: OrderId,
    next_item_id: i64,
}

impl StoreInner {
    /// Iterate (order, item) pairs across all orders
    pub fn order_items(&self) -> impl Iterator<Item = (&Order, &OrderItem)> {
        self.items_by_order.iter().flat_map(|(order_id, items)| {
            let order = &self.orders[order_id];
            items.iter().map(move |item| (order, item))
        })
    }

    /// Line items of one order, empty slice when the order is unknown
    pub fn items_of(&self, order: OrderId) -> &[OrderItem] {
        self.items_by_order
            .get(&order)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Shared store of the order-side relations
#[derive(Debug, Default)]
pub struct OrderStore {
    inner: RwLock<StoreInner>,
}

impl OrderStore {
    pub fn new(
        orders: Vec<Order>,
        items: Vec<OrderItem>,
        payments: Vec<Payment>,
        shippings: Vec<Shipping>,
    ) -> Self {
        let mut next_order_id = 1;
        let mut next_item_id = 1;
        let mut order_map = BTreeMap::new();
        for order in orders {
            next_order_id = next_order_id.max(order.id + 1);
            order_map.insert(order.id, order);
        }
        let mut items_by_order: BTreeMap<OrderId, Vec<OrderItem>> = BTreeMap::new();
        for item in items {
            next_item_id = next_item_id.max(item.id + 1);
            items_by_order.entry(item.order).or_default().push(item);
        }
        Self {
            inner: RwLock::new(StoreInner {
                orders: order_map,
                items_by_order,
                payments,
                shippings,
                next_order_id,
                next_item_id,
            }),
        }
    }

    /// Take a consistent read snapshot for the duration of one call
    pub fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read()
    }

    /// Append a committed sale: one Pending order plus its line items
    ///
    /// Lines are (product, quantity, unit price captured at sale time).
    /// Called only after the inventory decrement succeeded, so the append
    /// itself cannot fail.
    pub fn append_sale(
        &self,
        date: NaiveDate,
        customer: CustomerId,
        seller: SellerId,
        lines: &[(ProductId, i32, f64)],
    ) -> OrderId {
        let mut inner = self.inner.write();
        let order_id = inner.next_order_id;
        inner.next_order_id += 1;

        inner.orders.insert(
            order_id,
            Order {
                id: order_id,
                date,
                customer,
                seller,
                status: OrderStatus::Pending,
            },
        );

        let mut items = Vec::with_capacity(lines.len());
        for &(product, quantity, price_per_unit) in lines {
            let id = inner.next_item_id;
            inner.next_item_id += 1;
            items.push(OrderItem {
                id,
                order: order_id,
                product,
                quantity,
                price_per_unit,
            });
        }
        inner.items_by_order.insert(order_id, items);

        order_id
    }
}
