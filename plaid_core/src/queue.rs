// Copyright 2025 the Plaid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalescing draw scheduling.

use smallvec::SmallVec;

use crate::GroupId;

/// A drained scheduling batch, in scheduling order.
pub type DrawBatch = SmallVec<[GroupId; 4]>;

/// Coalesces draw requests so repeated configuration changes within one
/// logical update produce exactly one draw pass per group.
///
/// The host flushes the queue at the end of its update cycle; between
/// flushes, scheduling the same group any number of times is idempotent.
#[derive(Debug, Default)]
pub struct DrawQueue {
    pending: DrawBatch,
}

impl DrawQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `group` as needing a draw pass at the next flush.
    pub fn schedule(&mut self, group: GroupId) {
        if !self.pending.contains(&group) {
            self.pending.push(group);
        }
    }

    /// Returns true if no draw passes are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drains the current batch, leaving the queue empty.
    pub fn take(&mut self) -> DrawBatch {
        core::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn scheduling_is_idempotent_within_a_batch() {
        let mut queue = DrawQueue::new();
        queue.schedule(GroupId(0));
        queue.schedule(GroupId(1));
        queue.schedule(GroupId(0));

        let batch = queue.take();
        assert_eq!(batch.as_slice(), &[GroupId(0), GroupId(1)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn take_resets_for_the_next_batch() {
        let mut queue = DrawQueue::new();
        queue.schedule(GroupId(3));
        let _ = queue.take();

        queue.schedule(GroupId(3));
        assert_eq!(queue.take().as_slice(), &[GroupId(3)]);
    }
}
