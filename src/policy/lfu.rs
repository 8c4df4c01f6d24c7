//! LFU (Least Frequently Used) replacement policy.

use crate::common::FrameId;
use crate::frame::FrameTable;

/// Evicts the page with the fewest references since it was loaded.
///
/// Counters live per slot and restart at 1 whenever a page is (re)loaded,
/// so a page's history is forgotten once it is evicted.
pub struct LfuReplacer {
    /// Reference count per slot.
    counts: Vec<u64>,
}

impl LfuReplacer {
    /// Create a new LFU replacer.
    pub fn new(num_frames: usize) -> Self {
        Self {
            counts: vec![0; num_frames],
        }
    }

    /// Record that a page was loaded into `frame_id`.
    pub fn record_load(&mut self, frame_id: FrameId) {
        self.counts[frame_id.0] = 1;
    }

    /// Record a hit on the page in `frame_id`.
    pub fn record_hit(&mut self, frame_id: FrameId) {
        self.counts[frame_id.0] += 1;
    }

    /// Reference count of the page in `frame_id`.
    pub fn count(&self, frame_id: FrameId) -> u64 {
        self.counts[frame_id.0]
    }

    /// Resident slot with the smallest count; ties go to the lower slot.
    pub fn evict(&self, table: &FrameTable) -> Option<FrameId> {
        table
            .resident()
            .min_by_key(|&(frame_id, _)| (self.counts[frame_id.0], frame_id))
            .map(|(frame_id, _)| frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    fn loaded(pages: &[i64]) -> (FrameTable, LfuReplacer) {
        let mut table = FrameTable::new(pages.len());
        let mut replacer = LfuReplacer::new(pages.len());
        for &p in pages {
            let fid = table.insert_into_free_slot(PageId::new(p)).unwrap();
            replacer.record_load(fid);
        }
        (table, replacer)
    }

    #[test]
    fn test_lfu_evicts_least_frequent() {
        let (table, mut replacer) = loaded(&[1, 2, 3]);

        replacer.record_hit(FrameId::new(0));
        replacer.record_hit(FrameId::new(2));

        assert_eq!(replacer.count(FrameId::new(0)), 2);
        assert_eq!(replacer.evict(&table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_lfu_tie_breaks_by_slot() {
        let (table, replacer) = loaded(&[7, 8, 9]);
        assert_eq!(replacer.evict(&table), Some(FrameId::new(0)));
    }

    #[test]
    fn test_lfu_reload_resets_count() {
        let (mut table, mut replacer) = loaded(&[1, 2]);
        for _ in 0..5 {
            replacer.record_hit(FrameId::new(0));
        }
        replacer.record_hit(FrameId::new(1));

        let victim = replacer.evict(&table).unwrap();
        assert_eq!(victim, FrameId::new(1));

        table.replace_slot(victim, PageId::new(3)).unwrap();
        replacer.record_load(victim);
        assert_eq!(replacer.count(victim), 1);
    }
}
