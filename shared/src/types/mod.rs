//! Shared type definitions
//!
//! Holds the JSON envelope every relay endpoint answers with.

pub mod response;

pub use response::ApiResponse;
