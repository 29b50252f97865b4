//! Coalesced child-list change notifications.

use crate::element::ElementId;
use indexmap::IndexSet;

/// Items added to the list since the last flush.
///
/// Hosts may report the same item more than once before the controller gets
/// to run. The queue keeps the first-seen order and drops duplicates.
#[derive(Debug, Default, Clone)]
pub struct MutationQueue {
    pending: IndexSet<ElementId>,
}

impl MutationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, items: impl IntoIterator<Item = ElementId>) {
        self.pending.extend(items);
    }

    pub fn drain(&mut self) -> Vec<ElementId> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesces_duplicates_in_order() {
        let mut queue = MutationQueue::new();
        queue.push([ElementId(3), ElementId(1)]);
        queue.push([ElementId(3), ElementId(2)]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.drain(), vec![ElementId(3), ElementId(1), ElementId(2)]);
        assert!(queue.is_empty());
    }
}
