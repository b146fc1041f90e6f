//! Payment Model

use crate::types::{OrderId, PaymentId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Success,
    Failed,
}

/// Payment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    /// Order reference
    pub order: OrderId,
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Success).unwrap(),
            "\"SUCCESS\""
        );

        let status: PaymentStatus = serde_json::from_str("\"FAILED\"").unwrap();
        assert_eq!(status, PaymentStatus::Failed);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }
}
