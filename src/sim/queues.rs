//! Per-hand stacks of resting objects
//!
//! The most recently caught object is thrown first.

use super::hand::Hand;
use super::registry::ObjectId;

#[derive(Debug, Clone, Default)]
pub struct HandQueues {
    stacks: [Vec<ObjectId>; 2],
}

impl HandQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the most recently given object, or `None` if the hand is empty.
    ///
    /// An empty hand is expected; the caller creates a new object instead.
    #[inline]
    pub fn try_take(&mut self, hand: Hand) -> Option<ObjectId> {
        self.stacks[hand.index()].pop()
    }

    /// Place an object in `hand`. It must not already be held or airborne.
    #[inline]
    pub fn give(&mut self, hand: Hand, id: ObjectId) {
        debug_assert!(!self.contains(id), "{id} is already held");
        self.stacks[hand.index()].push(id);
    }

    pub fn len(&self, hand: Hand) -> usize {
        self.stacks[hand.index()].len()
    }

    pub fn total(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Objects in `hand`, oldest first
    pub fn iter(&self, hand: Hand) -> impl Iterator<Item = ObjectId> + '_ {
        self.stacks[hand.index()].iter().copied()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.stacks.iter().any(|s| s.contains(&id))
    }

    pub fn clear(&mut self) {
        for stack in &mut self.stacks {
            stack.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_in_first_out() {
        let mut queues = HandQueues::new();
        queues.give(Hand::Left, ObjectId(0));
        queues.give(Hand::Left, ObjectId(1));
        queues.give(Hand::Right, ObjectId(2));

        assert_eq!(queues.try_take(Hand::Left), Some(ObjectId(1)));
        assert_eq!(queues.try_take(Hand::Left), Some(ObjectId(0)));
        assert_eq!(queues.try_take(Hand::Left), None);
        assert_eq!(queues.len(Hand::Right), 1);
    }

    #[test]
    fn test_clear_empties_both_hands() {
        let mut queues = HandQueues::new();
        queues.give(Hand::Left, ObjectId(0));
        queues.give(Hand::Right, ObjectId(1));
        queues.clear();
        assert_eq!(queues.total(), 0);
        assert_eq!(queues.try_take(Hand::Right), None);
    }
}
