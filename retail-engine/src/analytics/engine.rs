//! AnalyticsEngine - ranked and aggregated business metrics
//!
//! Each query takes one read guard on the order store for its whole run
//! (snapshot read), aggregates with `Decimal`, and sorts with a documented
//! total order so repeated calls over an unchanged dataset are identical,
//! row order included.

use super::rank::competition_ranks;
use super::rows::*;
use crate::catalog::Catalog;
use crate::money;
use crate::store::OrderStore;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use shared::models::{Order, OrderStatus};
use shared::types::{CategoryId, CustomerId, ProductId, SellerId};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

/// Cancelled orders never shipped or charged; they are excluded from
/// revenue and quantity aggregates. Returned orders keep their sold
/// revenue — returns are surfaced by `most_returned_products` instead of
/// being netted out.
fn counts_toward_revenue(order: &Order) -> bool {
    order.status != OrderStatus::Cancelled
}

/// Stateless read queries over catalog + orders + inventory
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    catalog: Arc<Catalog>,
    store: Arc<OrderStore>,
}

impl AnalyticsEngine {
    pub fn new(catalog: Arc<Catalog>, store: Arc<OrderStore>) -> Self {
        Self { catalog, store }
    }

    /// Products ranked by summed sold quantity, descending; ties broken by
    /// ascending product id; at most `n` rows
    pub fn top_selling_products(&self, n: usize) -> Vec<TopProductRow> {
        let data = self.store.read();
        let mut sold: HashMap<ProductId, i64> = HashMap::new();
        for (order, item) in data.order_items() {
            if counts_toward_revenue(order) {
                *sold.entry(item.product).or_insert(0) += i64::from(item.quantity);
            }
        }

        let mut rows: Vec<TopProductRow> = sold
            .into_iter()
            .filter_map(|(product_id, total_quantity_sold)| {
                let product = self.catalog.product(product_id)?;
                Some(TopProductRow {
                    product_id,
                    product_name: product.name.clone(),
                    total_quantity_sold,
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_quantity_sold
                .cmp(&a.total_quantity_sold)
                .then(a.product_id.cmp(&b.product_id))
        });
        rows.truncate(n);
        rows
    }

    /// Revenue per category, zero-revenue categories included; descending
    /// revenue, ties by ascending category id
    pub fn revenue_by_category(&self) -> Vec<CategoryRevenueRow> {
        let data = self.store.read();
        let mut revenue: BTreeMap<CategoryId, Decimal> = self
            .catalog
            .categories()
            .map(|c| (c.id, Decimal::ZERO))
            .collect();
        for (order, item) in data.order_items() {
            if !counts_toward_revenue(order) {
                continue;
            }
            let Some(product) = self.catalog.product(item.product) else {
                continue;
            };
            *revenue.entry(product.category).or_insert(Decimal::ZERO) +=
                money::line_revenue(item.quantity, item.price_per_unit);
        }

        let mut rows: Vec<CategoryRevenueRow> = revenue
            .into_iter()
            .filter_map(|(category_id, total)| {
                let category = self.catalog.category(category_id)?;
                Some(CategoryRevenueRow {
                    category_id,
                    category_name: category.name.clone(),
                    total_revenue: money::to_f64(total),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_revenue
                .partial_cmp(&a.total_revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.category_id.cmp(&b.category_id))
        });
        rows
    }

    /// Mean of per-order summed line revenue; `None` when there are no
    /// orders (undefined, not an error)
    pub fn average_order_value(&self) -> Option<f64> {
        let data = self.store.read();
        let mut total = Decimal::ZERO;
        let mut orders = 0i64;
        for (order_id, items) in &data.items_by_order {
            let order = &data.orders[order_id];
            if !counts_toward_revenue(order) {
                continue;
            }
            orders += 1;
            for item in items {
                total += money::line_revenue(item.quantity, item.price_per_unit);
            }
        }
        if orders == 0 {
            return None;
        }
        Some(money::to_f64(total / Decimal::from(orders)))
    }

    /// Revenue per calendar month of order date, ascending chronologically
    pub fn monthly_sales_trend(&self) -> Vec<MonthlyRevenueRow> {
        let data = self.store.read();
        let mut months: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
        for (order, item) in data.order_items() {
            if !counts_toward_revenue(order) {
                continue;
            }
            *months
                .entry((order.date.year(), order.date.month()))
                .or_insert(Decimal::ZERO) +=
                money::line_revenue(item.quantity, item.price_per_unit);
        }
        months
            .into_iter()
            .map(|((year, month), total)| MonthlyRevenueRow {
                month: format!("{year:04}-{month:02}"),
                total_revenue: money::to_f64(total),
            })
            .collect()
    }

    /// Customers with zero associated orders (anti-join), ascending id
    pub fn customers_with_no_purchases(&self) -> Vec<NoPurchaseCustomerRow> {
        let data = self.store.read();
        let buyers: HashSet<CustomerId> = data.orders.values().map(|o| o.customer).collect();
        let mut rows: Vec<NoPurchaseCustomerRow> = self
            .catalog
            .customers()
            .filter(|c| !buyers.contains(&c.id))
            .map(|c| NoPurchaseCustomerRow {
                customer_id: c.id,
                customer_name: c.name.clone(),
                state: c.state.clone(),
            })
            .collect();
        rows.sort_by_key(|r| r.customer_id);
        rows
    }

    /// Revenue per (customer state, category); ascending by state, then
    /// ascending revenue, ties by ascending category id
    pub fn least_selling_categories_by_state(&self) -> Vec<StateCategoryRevenueRow> {
        let data = self.store.read();
        let mut revenue: BTreeMap<(String, CategoryId), Decimal> = BTreeMap::new();
        for (order, item) in data.order_items() {
            if !counts_toward_revenue(order) {
                continue;
            }
            let Some(customer) = self.catalog.customer(order.customer) else {
                continue;
            };
            let Some(product) = self.catalog.product(item.product) else {
                continue;
            };
            *revenue
                .entry((customer.state.clone(), product.category))
                .or_insert(Decimal::ZERO) +=
                money::line_revenue(item.quantity, item.price_per_unit);
        }

        let mut rows: Vec<StateCategoryRevenueRow> = revenue
            .into_iter()
            .filter_map(|((state, category_id), total)| {
                let category = self.catalog.category(category_id)?;
                Some(StateCategoryRevenueRow {
                    state,
                    category_id,
                    category_name: category.name.clone(),
                    total_revenue: money::to_f64(total),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            a.state
                .cmp(&b.state)
                .then(
                    a.total_revenue
                        .partial_cmp(&b.total_revenue)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
                .then(a.category_id.cmp(&b.category_id))
        });
        rows
    }

    /// Per-customer total revenue across all their orders, descending;
    /// ties by ascending customer id
    pub fn customer_lifetime_value(&self) -> Vec<CustomerValueRow> {
        let data = self.store.read();
        let mut revenue: HashMap<CustomerId, Decimal> = HashMap::new();
        for (order, item) in data.order_items() {
            if counts_toward_revenue(order) {
                *revenue.entry(order.customer).or_insert(Decimal::ZERO) +=
                    money::line_revenue(item.quantity, item.price_per_unit);
            }
        }

        let mut rows: Vec<CustomerValueRow> = revenue
            .into_iter()
            .filter_map(|(customer_id, total)| {
                let customer = self.catalog.customer(customer_id)?;
                Some(CustomerValueRow {
                    customer_id,
                    customer_name: customer.name.clone(),
                    total_revenue: money::to_f64(total),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_revenue
                .partial_cmp(&a.total_revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.customer_id.cmp(&b.customer_id))
        });
        rows
    }

    /// Sellers ranked by revenue, descending; ties by ascending seller id;
    /// at most `n` rows
    pub fn top_sellers_by_revenue(&self, n: usize) -> Vec<SellerRevenueRow> {
        let data = self.store.read();
        let mut revenue: HashMap<SellerId, Decimal> = HashMap::new();
        for (order, item) in data.order_items() {
            if counts_toward_revenue(order) {
                *revenue.entry(order.seller).or_insert(Decimal::ZERO) +=
                    money::line_revenue(item.quantity, item.price_per_unit);
            }
        }

        let mut rows: Vec<SellerRevenueRow> = revenue
            .into_iter()
            .filter_map(|(seller_id, total)| {
                let seller = self.catalog.seller(seller_id)?;
                Some(SellerRevenueRow {
                    seller_id,
                    seller_name: seller.name.clone(),
                    total_revenue: money::to_f64(total),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_revenue
                .partial_cmp(&a.total_revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.seller_id.cmp(&b.seller_id))
        });
        rows.truncate(n);
        rows
    }

    /// (price − cogs) / price × 100 per product, ascending product id;
    /// `margin_percent` is `None` for zero-price products
    pub fn product_profit_margin(&self) -> Vec<ProfitMarginRow> {
        let mut rows: Vec<ProfitMarginRow> = self
            .catalog
            .products()
            .map(|p| {
                let price = money::to_decimal(p.price);
                let cogs = money::to_decimal(p.cogs);
                ProfitMarginRow {
                    product_id: p.id,
                    product_name: p.name.clone(),
                    price: p.price,
                    cogs: p.cogs,
                    margin_percent: money::ratio_percent(price - cogs, price),
                }
            })
            .collect();
        rows.sort_by_key(|r| r.product_id);
        rows
    }

    /// Products ranked by how many returned shipments touched them
    /// (shipments with a non-null return date, joined through order items);
    /// descending count, ties by ascending product id; at most `n` rows
    pub fn most_returned_products(&self, n: usize) -> Vec<ReturnedProductRow> {
        let data = self.store.read();
        let mut returns: HashMap<ProductId, i64> = HashMap::new();
        for shipping in &data.shippings {
            if shipping.return_date.is_none() {
                continue;
            }
            // Each returned shipment counts once per distinct product in the order
            let products: BTreeSet<ProductId> = data
                .items_of(shipping.order)
                .iter()
                .map(|item| item.product)
                .collect();
            for product in products {
                *returns.entry(product).or_insert(0) += 1;
            }
        }

        let mut rows: Vec<ReturnedProductRow> = returns
            .into_iter()
            .filter_map(|(product_id, return_count)| {
                let product = self.catalog.product(product_id)?;
                Some(ReturnedProductRow {
                    product_id,
                    product_name: product.name.clone(),
                    return_count,
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.return_count
                .cmp(&a.return_count)
                .then(a.product_id.cmp(&b.product_id))
        });
        rows.truncate(n);
        rows
    }

    /// Sellers with no orders dated after `cutoff`, ascending seller id
    pub fn inactive_sellers(&self, cutoff: NaiveDate) -> Vec<InactiveSellerRow> {
        let data = self.store.read();
        let active: HashSet<SellerId> = data
            .orders
            .values()
            .filter(|o| o.date > cutoff)
            .map(|o| o.seller)
            .collect();
        let mut rows: Vec<InactiveSellerRow> = self
            .catalog
            .sellers()
            .filter(|s| !active.contains(&s.id))
            .map(|s| InactiveSellerRow {
                seller_id: s.id,
                seller_name: s.name.clone(),
                origin: s.origin.clone(),
            })
            .collect();
        rows.sort_by_key(|r| r.seller_id);
        rows
    }

    /// "New" = exactly one distinct order date, "Returning" = two or more;
    /// customers with zero orders are excluded; ascending customer id
    pub fn customer_segmentation(&self) -> Vec<CustomerSegmentRow> {
        let data = self.store.read();
        let mut dates: BTreeMap<CustomerId, BTreeSet<NaiveDate>> = BTreeMap::new();
        for order in data.orders.values() {
            dates.entry(order.customer).or_default().insert(order.date);
        }
        dates
            .into_iter()
            .filter_map(|(customer_id, dates)| {
                let customer = self.catalog.customer(customer_id)?;
                let segment = if dates.len() == 1 {
                    CustomerSegment::New
                } else {
                    CustomerSegment::Returning
                };
                Some(CustomerSegmentRow {
                    customer_id,
                    customer_name: customer.name.clone(),
                    segment,
                })
            })
            .collect()
    }

    /// Customers ranked by order count within their state; competition
    /// ranking (ties share a rank, gaps follow); rows with rank ≤ n kept;
    /// output ascending by state, then rank order
    pub fn top_n_customers_per_state(&self, n: u32) -> Vec<StateTopCustomerRow> {
        let data = self.store.read();
        let mut counts: HashMap<CustomerId, i64> = HashMap::new();
        for order in data.orders.values() {
            *counts.entry(order.customer).or_insert(0) += 1;
        }

        let mut by_state: BTreeMap<String, Vec<(CustomerId, String, i64)>> = BTreeMap::new();
        for (customer_id, order_count) in counts {
            let Some(customer) = self.catalog.customer(customer_id) else {
                continue;
            };
            by_state.entry(customer.state.clone()).or_default().push((
                customer_id,
                customer.name.clone(),
                order_count,
            ));
        }

        let mut rows = Vec::new();
        for (state, mut customers) in by_state {
            customers.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
            let ranks = competition_ranks(&customers, |a, b| a.2 == b.2);
            for ((customer_id, customer_name, order_count), rank) in
                customers.into_iter().zip(ranks)
            {
                if rank <= n {
                    rows.push(StateTopCustomerRow {
                        state: state.clone(),
                        customer_id,
                        customer_name,
                        order_count,
                        rank,
                    });
                }
            }
        }
        rows
    }

    /// Revenue per shipping provider; descending revenue, ties by
    /// ascending provider name
    pub fn revenue_by_shipping_provider(&self) -> Vec<ProviderRevenueRow> {
        let data = self.store.read();
        let mut revenue: BTreeMap<String, Decimal> = BTreeMap::new();
        for shipping in &data.shippings {
            let Some(order) = data.orders.get(&shipping.order) else {
                continue;
            };
            if !counts_toward_revenue(order) {
                continue;
            }
            let order_total: Decimal = data
                .items_of(shipping.order)
                .iter()
                .map(|item| money::line_revenue(item.quantity, item.price_per_unit))
                .sum();
            *revenue.entry(shipping.provider.clone()).or_insert(Decimal::ZERO) += order_total;
        }

        let mut rows: Vec<ProviderRevenueRow> = revenue
            .into_iter()
            .map(|(provider, total)| ProviderRevenueRow {
                provider,
                total_revenue: money::to_f64(total),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_revenue
                .partial_cmp(&a.total_revenue)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.provider.cmp(&b.provider))
        });
        rows
    }

    /// Period-over-period change per product: (A − B) / B over two
    /// caller-supplied, non-overlapping periods; products with zero
    /// period-B revenue are excluded; descending ratio, ties by ascending
    /// product id; at most `n` rows
    pub fn top_decreasing_revenue_products(
        &self,
        n: usize,
        period_a: Period,
        period_b: Period,
    ) -> Vec<DecreasingRevenueRow> {
        let data = self.store.read();
        let mut per_product: HashMap<ProductId, (Decimal, Decimal)> = HashMap::new();
        for (order, item) in data.order_items() {
            if !counts_toward_revenue(order) {
                continue;
            }
            let revenue = money::line_revenue(item.quantity, item.price_per_unit);
            let entry = per_product
                .entry(item.product)
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            if period_a.contains(order.date) {
                entry.0 += revenue;
            }
            if period_b.contains(order.date) {
                entry.1 += revenue;
            }
        }

        let mut rows: Vec<DecreasingRevenueRow> = per_product
            .into_iter()
            .filter_map(|(product_id, (a, b))| {
                // zero period-B revenue would divide by zero; excluded
                let change_ratio = money::change_ratio(a, b)?;
                let product = self.catalog.product(product_id)?;
                Some(DecreasingRevenueRow {
                    product_id,
                    product_name: product.name.clone(),
                    period_a_revenue: money::to_f64(a),
                    period_b_revenue: money::to_f64(b),
                    change_ratio,
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.change_ratio
                .partial_cmp(&a.change_ratio)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.product_id.cmp(&b.product_id))
        });
        rows.truncate(n);
        rows
    }
}
