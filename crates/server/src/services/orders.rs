//! Order finalization.
//!
//! Converts the clerk's draft order plus customer details into one
//! persisted order with its line items, all inside a single database
//! transaction. The grand total is recomputed server-side from the
//! draft subtotals, never taken from client input.

use sqlx::PgPool;
use thiserror::Error;

use pronto_core::{Customer, DraftOrder, Money, OrderId};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;

/// Errors that can occur while finalizing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The pending order store holds no drafts.
    #[error("no drafts to finalize")]
    EmptyDraft,

    /// Repository/database error. The transaction has been rolled back.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Outcome of a successful finalization.
#[derive(Debug, Clone, Copy)]
pub struct FinalizedOrder {
    /// The new order's ID.
    pub id: OrderId,
    /// The recomputed grand total, for display to the clerk.
    pub total: Money,
    /// Number of line items created.
    pub line_items: usize,
}

/// Order finalization service.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Finalize the draft order for the given customer.
    ///
    /// On success the caller is responsible for clearing the pending
    /// order store; on any error the store must be left untouched.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::EmptyDraft` when there is nothing to
    /// finalize — no order row is created. Returns
    /// `OrderError::Repository` if persistence fails; the order and its
    /// line items are rolled back together.
    pub async fn finalize(
        &self,
        customer: &Customer,
        draft: &DraftOrder,
    ) -> Result<FinalizedOrder, OrderError> {
        if draft.is_empty() {
            return Err(OrderError::EmptyDraft);
        }

        let total = draft.grand_total();

        let id = self
            .orders
            .create_with_line_items(customer, draft.items(), total)
            .await?;

        Ok(FinalizedOrder {
            id,
            total,
            line_items: draft.len(),
        })
    }
}
