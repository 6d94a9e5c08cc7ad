//! Shared wire types and utilities used across all domain modules.

pub mod serde_util;
pub mod zero;

pub use zero::{is_zero, IsZero};

use serde::{Deserialize, Serialize};

// ─── Page ────────────────────────────────────────────────────────────────────

/// Paginated list envelope returned by the Admin API list endpoints.
///
/// When more objects exist than fit in one response, `next` holds the URI of
/// the following page (e.g.
/// `http://localhost:8001/plugins?size=2&offset=4d924084-1adb-40a5-c042-63b19db421d1`)
/// and `offset` the cursor to resubmit. Both are opaque: pass them back
/// verbatim, never parse them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            next: None,
            offset: None,
        }
    }
}

impl<T> Page<T> {
    /// Whether the server reported a following page.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Cursor to resubmit for the following page, if any.
    pub fn next_offset(&self) -> Option<&str> {
        self.offset.as_deref().filter(|o| !o.is_empty())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
