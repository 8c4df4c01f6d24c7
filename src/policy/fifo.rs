//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::{FrameId, PageId};
use crate::frame::FrameTable;

/// Evicts pages in the order they were loaded.
///
/// Hits never reorder the queue: eviction order depends only on load time.
pub struct FifoReplacer {
    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new(num_frames: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(num_frames),
        }
    }

    /// Record that a page was loaded (into a free or a victim slot).
    pub fn record_load(&mut self, page: PageId) {
        self.queue.push_back(page);
    }

    /// Pop the oldest page and return the slot currently holding it.
    ///
    /// Returns None if the queue is empty or out of sync with the table.
    pub fn evict(&mut self, table: &FrameTable) -> Option<FrameId> {
        let oldest = self.queue.pop_front()?;
        table.lookup(oldest)
    }

    /// Number of pages being tracked.
    pub fn size(&self) -> usize {
        self.queue.len()
    }
}
