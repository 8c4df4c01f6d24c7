//! OPT (optimal, clairvoyant) replacement policy.
//!
//! Evicts the resident page whose next use lies furthest in the future, or
//! that is never used again. Needs the whole reference string up front.

use crate::common::{FrameId, PageId};
use crate::frame::FrameTable;

/// Stateless lookahead replacer.
#[derive(Debug, Default)]
pub struct OptReplacer;

impl OptReplacer {
    /// Create a new OPT replacer.
    pub fn new() -> Self {
        OptReplacer
    }

    /// Pick a victim by scanning the references that follow the fault.
    ///
    /// Every resident page starts as a candidate. Walking `future` in order,
    /// a candidate that is referenced again drops out. The scan stops once a
    /// single candidate is left or `future` runs out; the victim is the first
    /// surviving candidate in slot order.
    pub fn evict(&self, table: &FrameTable, future: &[PageId]) -> Option<FrameId> {
        let mut candidates: Vec<(FrameId, PageId)> = table.resident().collect();

        for page in future {
            if candidates.len() <= 1 {
                break;
            }
            if let Some(pos) = candidates.iter().position(|&(_, p)| p == *page) {
                candidates.remove(pos);
            }
        }

        candidates.first().map(|&(frame_id, _)| frame_id)
    }
}
