//! Clerk user domain types.
//!
//! These types represent validated domain objects separate from database
//! row types.

use chrono::{DateTime, Utc};

use pronto_core::{UserId, Username};

/// A clerk account (domain type).
///
/// The password hash is never carried here; the auth service fetches it
/// separately when verifying a login.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name.
    pub username: Username,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
