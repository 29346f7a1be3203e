//! Application services.

pub mod auth;
pub mod drafts;
pub mod orders;
pub mod sales;

pub use auth::AuthService;
pub use drafts::DraftStore;
pub use orders::OrderService;
pub use sales::SalesService;
