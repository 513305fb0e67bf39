//! Cursor pagination over a character's friends.
//!
//! Cursors are 1-based (`encode(index + 1)`) while slicing is 0-based; an
//! `after` cursor therefore skips exactly the elements up to and including
//! the one it was issued for. `has_next_page` is reported as
//! `to >= total_count`, i.e. it is set once the page reaches the end of the
//! sequence. Existing clients depend on both conventions.

use std::ops::Range;

use starwars_shared::{Character, EntityRef, FriendsConnection, FriendsEdge, PageInfo};
use tracing::debug;

use crate::cursor::{decode_cursor, encode_cursor};
use crate::errors::ResolveError;
use crate::interfaces::EntityStore;
use crate::type_resolver;

/// The slice of a sequence selected by `first`/`after`, with its page info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Length of the whole sequence.
    pub total_count: usize,
    /// Index of the first selected element.
    pub from: usize,
    /// Index one past the last selected element.
    pub to: usize,
    pub page_info: PageInfo,
}

impl PageWindow {
    /// The selected indices.
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    /// Number of selected elements.
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    /// Cursor of each selected element, in order.
    pub fn edge_cursors(&self) -> impl Iterator<Item = String> {
        self.range().map(|index| encode_cursor(index + 1))
    }
}

/// Compute the page selected by `first` and `after` over `total_count` elements.
///
/// * `first` - Maximum number of elements; `None` or `0` selects everything
///   after the cursor
/// * `after` - Cursor of the element to start after; `None` starts at the
///   beginning
///
/// # Returns
///
/// * `Ok(PageWindow)` - The selected window
/// * `Err(ResolveError::InvalidCursor)` - If `after` cannot be decoded
pub fn paginate(
    total_count: usize,
    first: Option<usize>,
    after: Option<&str>,
) -> Result<PageWindow, ResolveError> {
    let from = match after {
        Some(cursor) => decode_cursor(cursor)?,
        None => 0,
    };

    if from >= total_count {
        return Ok(PageWindow {
            total_count,
            from: total_count,
            to: total_count,
            page_info: PageInfo::default(),
        });
    }

    let to = match first {
        Some(limit) if limit > 0 => from.saturating_add(limit).min(total_count),
        _ => total_count,
    };

    Ok(PageWindow {
        total_count,
        from,
        to,
        page_info: PageInfo {
            start_cursor: Some(encode_cursor(from + 1)),
            end_cursor: Some(encode_cursor(to + 1)),
            has_next_page: to >= total_count,
        },
    })
}

/// Build the friends connection of one character.
///
/// References in the selected window are resolved through the store; a
/// reference that no longer resolves yields an edge without a node. The
/// input slice is never modified and `total_count` is always its length.
pub async fn resolve_friends_connection(
    store: &dyn EntityStore,
    friends: &[EntityRef],
    first: Option<usize>,
    after: Option<&str>,
) -> Result<FriendsConnection, ResolveError> {
    let window = paginate(friends.len(), first, after)?;

    debug!(
        total_count = window.total_count,
        from = window.from,
        to = window.to,
        "Resolved page window"
    );

    if window.is_empty() {
        return Ok(FriendsConnection::empty(window.total_count));
    }

    let mut nodes: Vec<Option<Character>> = Vec::with_capacity(window.len());
    for reference in &friends[window.range()] {
        nodes.push(type_resolver::character_by_id(store, &reference.id).await);
    }

    let edges = window
        .edge_cursors()
        .zip(nodes.iter().cloned())
        .map(|(cursor, node)| FriendsEdge { cursor, node })
        .collect();

    Ok(FriendsConnection {
        total_count: window.total_count,
        edges,
        friends: nodes,
        page_info: window.page_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_without_arguments_selects_everything() {
        let window = paginate(4, None, None).unwrap();

        assert_eq!(window.range(), 0..4);
        assert_eq!(window.page_info.start_cursor, Some(encode_cursor(1)));
        assert_eq!(window.page_info.end_cursor, Some(encode_cursor(5)));
    }

    #[test]
    fn test_paginate_first_after() {
        let window = paginate(4, Some(2), Some(&encode_cursor(1))).unwrap();

        assert_eq!(window.range(), 1..3);
        assert_eq!(window.total_count, 4);
        let cursors: Vec<String> = window.edge_cursors().collect();
        assert_eq!(cursors, vec![encode_cursor(2), encode_cursor(3)]);
        assert_eq!(window.page_info.start_cursor, Some(encode_cursor(2)));
        assert_eq!(window.page_info.end_cursor, Some(encode_cursor(4)));
    }

    #[test]
    fn test_paginate_first_is_clamped_to_length() {
        let window = paginate(3, Some(10), Some(&encode_cursor(2))).unwrap();
        assert_eq!(window.range(), 2..3);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_paginate_zero_first_means_unbounded() {
        let window = paginate(5, Some(0), Some(&encode_cursor(1))).unwrap();
        assert_eq!(window.range(), 1..5);
    }

    #[test]
    fn test_paginate_after_past_end_is_empty() {
        for after in [3, 4, 100] {
            let window = paginate(3, Some(2), Some(&encode_cursor(after))).unwrap();

            assert!(window.is_empty());
            assert_eq!(window.total_count, 3);
            assert_eq!(window.page_info, PageInfo::default());
        }
    }

    #[test]
    fn test_paginate_empty_sequence() {
        let window = paginate(0, None, None).unwrap();
        assert!(window.is_empty());
        assert!(!window.page_info.has_next_page);
    }

    #[test]
    fn test_paginate_invalid_cursor_is_fatal() {
        let result = paginate(3, Some(1), Some("definitely-not-a-cursor"));
        assert!(matches!(result, Err(ResolveError::InvalidCursor(_))));
    }

    /// `has_next_page` is set when the page reaches the end, and cleared while
    /// more elements follow. This is the inverse of the usual Relay meaning
    /// and is kept for compatibility with existing clients.
    #[test]
    fn test_has_next_page_is_set_at_end_of_sequence() {
        let middle = paginate(4, Some(2), None).unwrap();
        assert!(!middle.page_info.has_next_page);

        let last = paginate(4, Some(2), Some(&encode_cursor(2))).unwrap();
        assert_eq!(last.range(), 2..4);
        assert!(last.page_info.has_next_page);
    }
}
