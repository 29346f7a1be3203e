//! Core types for Pronto Pizza.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod customer;
pub mod id;
pub mod money;
pub mod username;

pub use customer::{Customer, CustomerError, CustomerName};
pub use id::*;
pub use money::Money;
pub use username::{Username, UsernameError};
