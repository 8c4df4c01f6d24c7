//! LRU (Least Recently Used) replacement policy.

use crate::common::FrameId;
use crate::frame::FrameTable;

/// Evicts the page whose most recent reference is oldest.
///
/// A logical clock stamps the slot on every reference: hit, first load and
/// load into a victim slot all count.
pub struct LruReplacer {
    /// Next stamp to hand out.
    clock: u64,

    /// Last-reference stamp per slot.
    stamps: Vec<u64>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new(num_frames: usize) -> Self {
        Self {
            clock: 0,
            stamps: vec![0; num_frames],
        }
    }

    /// Record a reference to the page in `frame_id`.
    pub fn record_access(&mut self, frame_id: FrameId) {
        self.stamps[frame_id.0] = self.clock;
        self.clock += 1;
    }

    /// Resident slot with the oldest stamp; ties go to the lower slot.
    pub fn evict(&self, table: &FrameTable) -> Option<FrameId> {
        table
            .resident()
            .min_by_key(|&(frame_id, _)| (self.stamps[frame_id.0], frame_id))
            .map(|(frame_id, _)| frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut table = FrameTable::new(3);
        let mut replacer = LruReplacer::new(3);

        for p in [1, 2, 3] {
            let fid = table.insert_into_free_slot(PageId::new(p)).unwrap();
            replacer.record_access(fid);
        }

        // Touch 1 then 2; 3 is now least recent.
        replacer.record_access(FrameId::new(0));
        replacer.record_access(FrameId::new(1));

        assert_eq!(replacer.evict(&table), Some(FrameId::new(2)));
    }

    #[test]
    fn test_lru_reload_counts_as_reference() {
        let mut table = FrameTable::new(2);
        let mut replacer = LruReplacer::new(2);

        for p in [1, 2] {
            let fid = table.insert_into_free_slot(PageId::new(p)).unwrap();
            replacer.record_access(fid);
        }

        let victim = replacer.evict(&table).unwrap();
        assert_eq!(victim, FrameId::new(0));
        table.replace_slot(victim, PageId::new(3)).unwrap();
        replacer.record_access(victim);

        assert_eq!(replacer.evict(&table), Some(FrameId::new(1)));
    }
}
