//! Per-group insertion sequence numbers.

use std::fmt;

/// Sequence number a group hands out when an item is added to it.
///
/// Only used as the final tie-break when sorting siblings; ids from different
/// groups are not comparable in any meaningful way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChildId(u64);

impl ChildId {
    /// The raw sequence value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic counter owned by each group.
///
/// The first id handed out is `1`. Ids are never reused, even after the item
/// holding them is removed.
#[derive(Debug, Clone, Default)]
pub struct ChildIdSequence {
    current: u64,
}

impl ChildIdSequence {
    /// Create a sequence that has not handed out any id yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter and return the new id.
    pub fn next_id(&mut self) -> ChildId {
        self.current += 1;
        ChildId(self.current)
    }

    /// The most recently issued id, if any.
    pub fn current(&self) -> Option<ChildId> {
        (self.current > 0).then_some(ChildId(self.current))
    }
}
