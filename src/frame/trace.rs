//! Per-reference trace records.

use crate::common::{FrameId, PageId};

/// What happened on one step of a simulation.
///
/// Created once per reference by the driver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// The page that was referenced.
    pub reference: PageId,

    /// Frame table contents after the step, in slot order.
    pub frame_snapshot: Vec<Option<PageId>>,

    /// Whether the reference missed the frame table.
    pub is_fault: bool,

    /// Slot that was hit, filled, or overwritten.
    pub slot: FrameId,

    /// Page evicted to make room, if any.
    pub evicted: Option<PageId>,
}

impl TraceRecord {
    /// True if this step evicted a resident page.
    #[inline]
    pub fn is_eviction(&self) -> bool {
        self.evicted.is_some()
    }
}
