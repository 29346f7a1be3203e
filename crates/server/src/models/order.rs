//! Finalized order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pronto_core::{Money, OrderId};

/// A persisted order (domain type).
///
/// Line items are written alongside the order inside the finalization
/// transaction and are not read back by any view, so they have no
/// domain type of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Customer name as captured at finalization.
    pub customer_name: String,
    /// Delivery address.
    pub customer_address: String,
    /// Contact phone.
    pub customer_phone: String,
    /// When the order was placed (database-assigned).
    pub placed_at: DateTime<Utc>,
    /// Sum of the line item subtotals at creation time.
    pub total: Money,
}
