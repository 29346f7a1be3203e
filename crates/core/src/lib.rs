//! Pronto Pizza Core - Shared types library.
//!
//! This crate provides common types used across all Pronto Pizza components:
//! - `server` - Clerk-facing order-entry and reporting site
//! - `cli` - Command-line tools for migrations and user management
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and validated
//!   customer fields
//! - [`pizza`] - The menu: pizza sizes and extra toppings
//! - [`pricing`] - Subtotal computation for a pizza configuration
//! - [`draft`] - The in-progress order a clerk builds up before finalizing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod draft;
pub mod pizza;
pub mod pricing;
pub mod types;

pub use draft::{DraftItem, DraftOrder};
pub use pizza::{PizzaSize, Topping};
pub use types::*;
