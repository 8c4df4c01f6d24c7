//! Second-Chance and CLOCK replacement policies.
//!
//! Both keep a used bit per slot and a circular hand. On eviction the hand
//! sweeps forward: a slot with its bit set has the bit cleared and is
//! skipped, the first slot with a clear bit is the victim. They differ only
//! in the bit given to a freshly loaded page: Second-Chance clears it, CLOCK
//! sets it so a new page survives at least one full sweep.

use crate::common::FrameId;

/// Used-bit sweep replacer shared by Second-Chance and CLOCK.
pub struct ClockReplacer {
    /// Used bit per slot.
    used: Vec<bool>,

    /// Next slot the hand will inspect.
    hand: usize,

    /// Bit given to a page when it is loaded.
    used_on_load: bool,
}

impl ClockReplacer {
    /// Second-Chance: loaded pages start with a clear bit.
    pub fn second_chance(num_frames: usize) -> Self {
        Self::new(num_frames, false)
    }

    /// CLOCK: loaded pages start with the bit set.
    pub fn clock(num_frames: usize) -> Self {
        Self::new(num_frames, true)
    }

    fn new(num_frames: usize, used_on_load: bool) -> Self {
        Self {
            used: vec![false; num_frames],
            hand: 0,
            used_on_load,
        }
    }

    /// Record that a page was loaded into `frame_id`.
    pub fn record_load(&mut self, frame_id: FrameId) {
        self.used[frame_id.0] = self.used_on_load;
    }

    /// Record a hit; the hand does not move.
    pub fn record_hit(&mut self, frame_id: FrameId) {
        self.used[frame_id.0] = true;
    }

    /// Whether the slot's used bit is set.
    pub fn is_used(&self, frame_id: FrameId) -> bool {
        self.used[frame_id.0]
    }

    /// Current hand position.
    pub fn hand(&self) -> FrameId {
        FrameId::new(self.hand)
    }

    /// Sweep for a victim, leaving the hand just past it.
    ///
    /// Only called on a full table. Two passes always suffice: the first
    /// clears every bit it skips.
    pub fn evict(&mut self) -> Option<FrameId> {
        let n = self.used.len();

        for _ in 0..2 * n {
            let slot = self.hand;
            self.hand = (self.hand + 1) % n;

            if self.used[slot] {
                self.used[slot] = false;
            } else {
                return Some(FrameId::new(slot));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(mut replacer: ClockReplacer, n: usize) -> ClockReplacer {
        for i in 0..n {
            replacer.record_load(FrameId::new(i));
        }
        replacer
    }

    #[test]
    fn test_second_chance_new_pages_unmarked() {
        let mut replacer = loaded(ClockReplacer::second_chance(3), 3);
        assert!(!replacer.is_used(FrameId::new(0)));

        assert_eq!(replacer.evict(), Some(FrameId::new(0)));
        assert_eq!(replacer.hand(), FrameId::new(1));
    }

    #[test]
    fn test_second_chance_skips_used() {
        let mut replacer = loaded(ClockReplacer::second_chance(3), 3);
        replacer.record_hit(FrameId::new(0));
        replacer.record_hit(FrameId::new(1));

        assert_eq!(replacer.evict(), Some(FrameId::new(2)));
        // Skipped slots lost their bit.
        assert!(!replacer.is_used(FrameId::new(0)));
        assert!(!replacer.is_used(FrameId::new(1)));
        assert_eq!(replacer.hand(), FrameId::new(0));
    }

    #[test]
    fn test_clock_new_pages_marked() {
        let mut replacer = loaded(ClockReplacer::clock(3), 3);
        assert!(replacer.is_used(FrameId::new(2)));

        // Full sweep clears everything, then slot 0 goes.
        assert_eq!(replacer.evict(), Some(FrameId::new(0)));
        assert_eq!(replacer.hand(), FrameId::new(1));
        assert!(!replacer.is_used(FrameId::new(1)));
    }

    #[test]
    fn test_hit_does_not_move_hand() {
        let mut replacer = loaded(ClockReplacer::clock(2), 2);
        replacer.record_hit(FrameId::new(1));
        assert_eq!(replacer.hand(), FrameId::new(0));
    }

    #[test]
    fn test_single_frame() {
        let mut replacer = loaded(ClockReplacer::clock(1), 1);
        assert_eq!(replacer.evict(), Some(FrameId::new(0)));
        assert_eq!(replacer.hand(), FrameId::new(0));
    }
}
