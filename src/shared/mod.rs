/// Shared utilities - error types and common result alias
pub mod error;
pub mod result;

pub use result::Result;
