//! Slice chunking.

use crate::core::error::{Error, Result};

/// Split a slice into consecutive chunks of at most `size` elements.
/// The final chunk may be shorter. A zero size is a validation error;
/// an empty slice yields an empty vector.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::validation_invalid_argument(
            "size",
            "Chunk size must be at least 1",
            Some("0".to_string()),
            None,
        ));
    }

    Ok(items.chunks(size).map(|c| c.to_vec()).collect())
}
