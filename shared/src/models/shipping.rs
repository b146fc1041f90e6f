//! Shipping Model

use crate::types::{OrderId, ShippingId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery status of a shipment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    #[default]
    InTransit,
    Delivered,
    Returned,
    Failed,
}

/// Shipping entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipping {
    pub id: ShippingId,
    /// Order reference
    pub order: OrderId,
    pub shipping_date: NaiveDate,
    /// `None` means "not returned" — a valid terminal value, not missing data
    pub return_date: Option<NaiveDate>,
    pub provider: String,
    pub delivery_status: DeliveryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::InTransit).unwrap(),
            "\"IN_TRANSIT\""
        );

        let status: DeliveryStatus = serde_json::from_str("\"RETURNED\"").unwrap();
        assert_eq!(status, DeliveryStatus::Returned);
    }

    #[test]
    fn test_null_return_date_round_trip() {
        let shipping = Shipping {
            id: 301,
            order: 101,
            shipping_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            return_date: None,
            provider: "FedEx".to_string(),
            delivery_status: DeliveryStatus::Delivered,
        };

        let json = serde_json::to_value(&shipping).unwrap();
        assert!(json.get("return_date").unwrap().is_null());

        let back: Shipping = serde_json::from_value(json).unwrap();
        assert_eq!(back.return_date, None);
    }
}
