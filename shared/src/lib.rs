//! Shared utilities and types for the payment relay services

pub mod observability;
pub mod types;

pub use types::ApiResponse;
