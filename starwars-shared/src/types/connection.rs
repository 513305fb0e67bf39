//! Relay-style pagination envelopes.
//!
//! These values are built per request by the connection resolver and are
//! never stored.

use serde::{Deserialize, Serialize};

use super::entity::Character;

/// Information for paginating a connection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the first element of the page. Absent for an empty page.
    pub start_cursor: Option<String>,
    /// Cursor one past the last element of the page. Absent for an empty page.
    pub end_cursor: Option<String>,
    /// Set once the page reaches the end of the sequence.
    pub has_next_page: bool,
}

/// An edge object for a character's friends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendsEdge {
    /// A cursor used for pagination.
    pub cursor: String,
    /// The character represented by this friendship edge. Absent when the
    /// reference no longer resolves.
    pub node: Option<Character>,
}

/// A connection object for a character's friends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendsConnection {
    /// The total number of friends, regardless of the page requested.
    pub total_count: usize,
    /// The edges for each of the character's friends on this page.
    pub edges: Vec<FriendsEdge>,
    /// The friends on this page, without the edge wrappers.
    pub friends: Vec<Option<Character>>,
    /// Information for paginating this connection.
    pub page_info: PageInfo,
}

impl FriendsConnection {
    /// A connection carrying only the total count.
    pub fn empty(total_count: usize) -> Self {
        Self {
            total_count,
            ..Default::default()
        }
    }

    /// Returns true if the page holds no friends.
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Number of friends on this page.
    pub fn len(&self) -> usize {
        self.friends.len()
    }
}
