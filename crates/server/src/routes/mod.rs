//! HTTP route handlers.
//!
//! Handlers return JSON view models and redirects; markup is the
//! front-end's concern.
//!
//! # Route Structure
//!
//! ```text
//! GET  /           - Redirect to login
//! GET  /health     - Health check
//!
//! # Auth
//! GET  /login      - Login view
//! POST /login      - Login action
//! GET  /logout     - Logout action
//!
//! # Order entry (requires auth)
//! GET  /index      - Order form view: menu, current drafts, running total
//! POST /index      - Add a pizza to the pending order
//! POST /quitar     - Remove a pending pizza by position
//! POST /terminar   - Finalize the order, clear the pending store
//!
//! # Sales reports
//! GET  /ventas     - Empty report view
//! POST /ventas     - Report filtered by day or month
//! GET  /historial  - Same report, auth required
//! POST /historial  - Same report, auth required
//! ```

pub mod auth;
pub mod orders;
pub mod sales;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::home))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/index", get(orders::order_entry).post(orders::add_pizza))
        .route("/quitar", post(orders::remove_pizza))
        .route("/terminar", post(orders::finalize))
        .route("/ventas", get(sales::sales_page).post(sales::sales_report))
        .route(
            "/historial",
            get(sales::history_page).post(sales::history_report),
        )
}
