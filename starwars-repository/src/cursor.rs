//! Opaque pagination cursors.
//!
//! A cursor is `base64("cursor" + position)` using the standard alphabet with
//! padding. Callers must treat the string as opaque.

use base64::{engine::general_purpose, Engine as _};

use crate::errors::ResolveError;

const CURSOR_PREFIX: &str = "cursor";

/// Encode a position into an opaque cursor.
pub fn encode_cursor(position: usize) -> String {
    general_purpose::STANDARD.encode(format!("{}{}", CURSOR_PREFIX, position))
}

/// Decode a cursor produced by [`encode_cursor`] back into its position.
///
/// # Returns
///
/// * `Ok(usize)` - The encoded position
/// * `Err(ResolveError::InvalidCursor)` - If the string is not valid base64, or
///   its payload is not `cursor` followed by a non-negative decimal integer
pub fn decode_cursor(cursor: &str) -> Result<usize, ResolveError> {
    let bytes = general_purpose::STANDARD
        .decode(cursor)
        .map_err(|e| ResolveError::invalid_cursor(format!("{}: {}", cursor, e)))?;

    let payload = String::from_utf8(bytes)
        .map_err(|_| ResolveError::invalid_cursor(format!("{}: payload is not UTF-8", cursor)))?;

    let digits = payload.strip_prefix(CURSOR_PREFIX).ok_or_else(|| {
        ResolveError::invalid_cursor(format!("{}: missing `{}` prefix", cursor, CURSOR_PREFIX))
    })?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ResolveError::invalid_cursor(format!(
            "{}: position must be decimal digits",
            cursor
        )));
    }

    digits
        .parse::<usize>()
        .map_err(|e| ResolveError::invalid_cursor(format!("{}: {}", cursor, e)))
}
