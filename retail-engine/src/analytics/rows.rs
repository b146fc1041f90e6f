//! Analytics output rows
//!
//! Stable, named fields consumed by the reporting facade.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::types::{CategoryId, CustomerId, ProductId, SellerId};

/// Half-open is deliberately avoided: both bounds are inclusive business dates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Row of `top_selling_products`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopProductRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_quantity_sold: i64,
}

/// Row of `revenue_by_category`; zero-revenue categories are included
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRevenueRow {
    pub category_id: CategoryId,
    pub category_name: String,
    pub total_revenue: f64,
}

/// Row of `monthly_sales_trend`; `month` is "YYYY-MM"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenueRow {
    pub month: String,
    pub total_revenue: f64,
}

/// Row of `customers_with_no_purchases`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoPurchaseCustomerRow {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub state: String,
}

/// Row of `least_selling_categories_by_state`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateCategoryRevenueRow {
    pub state: String,
    pub category_id: CategoryId,
    pub category_name: String,
    pub total_revenue: f64,
}

/// Row of `customer_lifetime_value`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerValueRow {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub total_revenue: f64,
}

/// Row of `top_sellers_by_revenue`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerRevenueRow {
    pub seller_id: SellerId,
    pub seller_name: String,
    pub total_revenue: f64,
}

/// Row of `product_profit_margin`
///
/// `margin_percent` is `None` when price is zero — an explicit undefined
/// ratio, never infinity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitMarginRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: f64,
    pub cogs: f64,
    pub margin_percent: Option<f64>,
}

/// Row of `most_returned_products`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReturnedProductRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub return_count: i64,
}

/// Row of `inactive_sellers`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InactiveSellerRow {
    pub seller_id: SellerId,
    pub seller_name: String,
    pub origin: String,
}

/// Segment of `customer_segmentation`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerSegment {
    /// Exactly one distinct order date
    New,
    /// Two or more distinct order dates
    Returning,
}

/// Row of `customer_segmentation`; customers with zero orders are excluded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerSegmentRow {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub segment: CustomerSegment,
}

/// Row of `top_n_customers_per_state`; `rank` uses competition ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateTopCustomerRow {
    pub state: String,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub order_count: i64,
    pub rank: u32,
}

/// Row of `revenue_by_shipping_provider`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderRevenueRow {
    pub provider: String,
    pub total_revenue: f64,
}

/// Row of `top_decreasing_revenue_products`
///
/// `change_ratio` = (period A − period B) / period B; products with zero
/// period-B revenue are excluded upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecreasingRevenueRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub period_a_revenue: f64,
    pub period_b_revenue: f64,
    pub change_ratio: f64,
}
