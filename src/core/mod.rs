// Public modules
pub mod error;
pub mod output;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{ApiError, ApiResponse};
