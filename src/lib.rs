pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `oddjob::Error` instead of `oddjob::core::error::Error`
pub use core::*;
pub use utils::*;
