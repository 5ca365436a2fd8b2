//! Generic utility primitives with zero domain knowledge.
//!
//! - `array` - Slice chunking
//! - `case` - String case conversion and truncation
//! - `encoding` - Base64 and JSON-over-base64 (de)serialization
//! - `enums` - Enum parsing with typed errors
//! - `env` - Runtime environment detection
//! - `hash` - Content hashing and filename sanitization
//! - `naming` - Human-entered name validation and normalization
//! - `number` - Clamping, parsing, and checked conversion
//! - `pattern` - Regex character-class escaping
//! - `sleep` - Blocking delay helpers
//! - `slug` - Slug generation, validation, and collision resolution
//! - `time` - Time-unit conversion and timestamp helpers
//! - `validation` - Input validation helpers

pub mod array;
pub mod case;
pub mod encoding;
pub mod enums;
pub mod env;
pub mod hash;
pub mod naming;
pub mod number;
pub mod pattern;
pub mod sleep;
pub mod slug;
pub mod time;
pub mod validation;
