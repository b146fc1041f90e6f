//! Shared fixtures for integration tests

// each test binary uses its own subset of these helpers
#![allow(dead_code)]

use chrono::NaiveDate;
use retail_engine::{Dataset, RetailCore};
use shared::models::{
    Category, Customer, DeliveryStatus, InventoryRecord, Order, OrderItem, OrderStatus, Payment,
    PaymentStatus, Product, Seller, Shipping,
};

pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Small but relationally complete dataset
///
/// Revenue-relevant totals (cancelled order 105 excluded):
/// - product 7 "Wireless Mouse": qty 3, revenue 75
/// - product 8 "Keyboard": qty 1, revenue 50
/// - product 9 "T-Shirt": qty 8, revenue 80
/// - product 10 "Sticker": qty 1, revenue 0 (zero-price product)
/// - categories: Electronics 125, Clothing 80, Books 0
pub fn sample_dataset() -> Dataset {
    Dataset {
        customers: vec![
            customer(1, "Alice", "TX"),
            customer(2, "Bob", "TX"),
            customer(3, "Carol", "CA"),
            customer(4, "Dave", "CA"),
        ],
        sellers: vec![
            Seller {
                id: 1,
                name: "Acme".to_string(),
                origin: "US".to_string(),
            },
            Seller {
                id: 2,
                name: "Globex".to_string(),
                origin: "DE".to_string(),
            },
        ],
        categories: vec![
            Category {
                id: 1,
                name: "Electronics".to_string(),
            },
            Category {
                id: 2,
                name: "Clothing".to_string(),
            },
            Category {
                id: 3,
                name: "Books".to_string(),
            },
        ],
        products: vec![
            product(7, "Wireless Mouse", 25.0, 10.0, 1),
            product(8, "Keyboard", 50.0, 30.0, 1),
            product(9, "T-Shirt", 10.0, 4.0, 2),
            product(10, "Sticker", 0.0, 0.0, 2),
        ],
        orders: vec![
            order(101, d(2024, 1, 10), 1, 1, OrderStatus::Delivered),
            order(102, d(2024, 1, 20), 1, 1, OrderStatus::Delivered),
            order(103, d(2024, 2, 5), 2, 1, OrderStatus::Shipped),
            order(104, d(2024, 2, 15), 3, 2, OrderStatus::Delivered),
            order(105, d(2024, 2, 5), 2, 1, OrderStatus::Cancelled),
        ],
        order_items: vec![
            item(1001, 101, 7, 2, 25.0),
            item(1002, 101, 9, 3, 10.0),
            item(1003, 102, 8, 1, 50.0),
            item(1004, 103, 7, 1, 25.0),
            item(1005, 104, 9, 5, 10.0),
            item(1006, 105, 8, 4, 50.0),
            item(1007, 104, 10, 1, 0.0),
        ],
        payments: vec![
            payment(201, 101, d(2024, 1, 11), PaymentStatus::Success),
            payment(202, 102, d(2024, 1, 21), PaymentStatus::Success),
            payment(203, 103, d(2024, 2, 6), PaymentStatus::Failed),
            payment(204, 104, d(2024, 2, 16), PaymentStatus::Pending),
        ],
        shippings: vec![
            shipping(301, 101, d(2024, 1, 12), None, "FedEx", DeliveryStatus::Delivered),
            shipping(
                302,
                102,
                d(2024, 1, 28),
                Some(d(2024, 2, 10)),
                "UPS",
                DeliveryStatus::Returned,
            ),
            shipping(303, 103, d(2024, 2, 12), None, "FedEx", DeliveryStatus::InTransit),
            shipping(
                304,
                104,
                d(2024, 2, 17),
                Some(d(2024, 3, 1)),
                "UPS",
                DeliveryStatus::Returned,
            ),
        ],
        inventory: vec![
            inventory(401, 7, 1, 3, Some(d(2024, 1, 1))),
            inventory(402, 7, 2, 4, None),
            inventory(403, 8, 1, 12, None),
            inventory(404, 9, 1, 100, None),
            inventory(405, 10, 1, 2, None),
        ],
    }
}

pub fn sample_core() -> RetailCore {
    RetailCore::new(sample_dataset()).expect("fixture dataset is consistent")
}

pub fn customer(id: i64, name: &str, state: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        state: state.to_string(),
        address: "unknown".to_string(),
    }
}

pub fn product(id: i64, name: &str, price: f64, cogs: f64, category: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        cogs,
        category,
    }
}

pub fn order(id: i64, date: NaiveDate, customer: i64, seller: i64, status: OrderStatus) -> Order {
    Order {
        id,
        date,
        customer,
        seller,
        status,
    }
}

pub fn item(id: i64, order: i64, product: i64, quantity: i32, price_per_unit: f64) -> OrderItem {
    OrderItem {
        id,
        order,
        product,
        quantity,
        price_per_unit,
    }
}

pub fn payment(id: i64, order: i64, date: NaiveDate, status: PaymentStatus) -> Payment {
    Payment {
        id,
        order,
        date,
        status,
    }
}

pub fn shipping(
    id: i64,
    order: i64,
    shipping_date: NaiveDate,
    return_date: Option<NaiveDate>,
    provider: &str,
    delivery_status: DeliveryStatus,
) -> Shipping {
    Shipping {
        id,
        order,
        shipping_date,
        return_date,
        provider: provider.to_string(),
        delivery_status,
    }
}

pub fn inventory(
    id: i64,
    product: i64,
    warehouse: i64,
    stock: i64,
    last_restock: Option<NaiveDate>,
) -> InventoryRecord {
    InventoryRecord {
        id,
        product,
        warehouse,
        stock,
        last_restock,
    }
}
