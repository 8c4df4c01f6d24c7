//! Frame table and trace records.
//!
//! # Components
//! - [`FrameTable`] - Fixed array of slots, each empty or holding one page
//! - [`TraceRecord`] - Snapshot of one simulation step

mod frame_table;
mod trace;

pub use frame_table::FrameTable;
pub use trace::TraceRecord;
