//! pagesim - page replacement simulation with interchangeable policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Reference String (reference.rs)  [immutable]     │   │
//! │  │        whitespace-separated integers → Vec<PageId>      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Simulator (simulation/)                     │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Policies: FIFO | OPT | LRU | LFU | SC | CLOCK  │   │   │
//! │  │   │        (closed enum, chosen per run)            │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        FrameTable + SimulationStats                     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           TraceRecord stream → Report (report.rs)       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`frame`] - Frame table and trace records
//! - [`policy`] - Replacement policy implementations
//! - [`simulation`] - The driver and its statistics
//! - [`reference`] - Reference strings and the loader
//! - [`report`] - Column-aligned output
//!
//! # Quick Start
//! ```
//! use pagesim::{run_simulation, PolicyKind, ReferenceString};
//!
//! let refs: ReferenceString = "1 2 3 1 2 4".parse().unwrap();
//! let (trace, faults) = run_simulation(&refs, 3, PolicyKind::Lru).unwrap();
//!
//! assert_eq!(faults, 4);
//! assert_eq!(trace[5].evicted.map(|p| p.0), Some(3));
//! ```

pub mod common;
pub mod frame;
pub mod policy;
pub mod reference;
pub mod report;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::{
    parse_frame_count, Error, FrameId, PageId, Result, SimulationConfig, MIN_FRAMES,
};

pub use frame::{FrameTable, TraceRecord};
pub use policy::{Policy, PolicyKind};
pub use reference::ReferenceString;
pub use report::TraceRenderer;
pub use simulation::{compare_policies, run_simulation, SimulationStats, Simulator};
