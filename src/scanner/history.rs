//! Session history of verdicts

use crate::scanner::types::VerifiedProduct;
use std::collections::VecDeque;

/// Number of verdicts kept for the session
pub const HISTORY_CAPACITY: usize = 5;

/// Bounded, most-recent-first buffer of verdicts
///
/// Lives only as long as the session and has no clear operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryBuffer {
    entries: VecDeque<VerifiedProduct>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a verdict, evicting the oldest entries beyond capacity
    pub fn push(&mut self, product: VerifiedProduct) {
        self.entries.push_front(product);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent verdict
    pub fn latest(&self) -> Option<&VerifiedProduct> {
        self.entries.front()
    }

    /// Iterate most recent first
    pub fn iter(&self) -> impl Iterator<Item = &VerifiedProduct> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<VerifiedProduct> {
        self.entries.iter().cloned().collect()
    }
}
