//! Core business logic - framework-agnostic catalog state, forms, pricing and dashboard data.

/// Back-office state container seeded from configuration
pub mod admin;
/// Dashboard stats, recent orders and sales chart helpers
pub mod dashboard;
/// Create/edit form state machine
pub mod edit;
/// Form values and their validation
pub mod forms;
/// Table pagination
pub mod pagination;
/// Selected image to data URL pipeline
pub mod preview;
/// Effective price and price labels
pub mod pricing;
/// Search box filtering
pub mod search;
/// Ordered in-memory record collections
pub mod store;
