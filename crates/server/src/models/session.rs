//! Session-related types.
//!
//! Types stored in the session for authentication state and the
//! clerk's pending draft order.

use serde::{Deserialize, Serialize};

use pronto_core::UserId;

/// Session-stored clerk identity.
///
/// Minimal data stored in the session to identify the logged-in clerk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Clerk's database ID.
    pub id: UserId,
    /// Clerk's login name.
    pub username: String,
}

/// Session keys for authentication and draft data.
pub mod keys {
    /// Key for storing the current logged-in clerk.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the clerk's pending draft order.
    pub const DRAFT_ORDER: &str = "draft_order";
}
