//! Page replacement policies (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`OptReplacer`] - Optimal lookahead
//! - [`LruReplacer`] - Least Recently Used
//! - [`LfuReplacer`] - Least Frequently Used
//! - [`ClockReplacer`] - Second-Chance and CLOCK
//!
//! The driver talks to all of them through [`Policy`], a closed enum
//! dispatched with a single `match` per operation.

mod clock;
mod fifo;
mod lfu;
mod lru;
mod opt;

use std::fmt;
use std::str::FromStr;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lfu::LfuReplacer;
pub use lru::LruReplacer;
pub use opt::OptReplacer;

use crate::common::{Error, FrameId, PageId, Result};
use crate::frame::FrameTable;
use crate::reference::ReferenceString;

/// Names a replacement policy.
///
/// # Example
/// ```
/// use pagesim::PolicyKind;
///
/// let kind: PolicyKind = "sc".parse().unwrap();
/// assert_eq!(kind, PolicyKind::SecondChance);
/// assert_eq!(kind.to_string(), "SECOND-CHANCE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Opt,
    Lru,
    Lfu,
    SecondChance,
    Clock,
}

impl PolicyKind {
    /// Every policy, in command-line order.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fifo,
        PolicyKind::Opt,
        PolicyKind::Lru,
        PolicyKind::Lfu,
        PolicyKind::SecondChance,
        PolicyKind::Clock,
    ];

    /// Short name accepted on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Opt => "opt",
            PolicyKind::Lru => "lru",
            PolicyKind::Lfu => "lfu",
            PolicyKind::SecondChance => "sc",
            PolicyKind::Clock => "c",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Opt => "OPT",
            PolicyKind::Lru => "LRU",
            PolicyKind::Lfu => "LFU",
            PolicyKind::SecondChance => "SECOND-CHANCE",
            PolicyKind::Clock => "CLOCK",
        };
        f.write_str(name)
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "opt" | "optimal" => Ok(PolicyKind::Opt),
            "lru" => Ok(PolicyKind::Lru),
            "lfu" => Ok(PolicyKind::Lfu),
            "sc" | "second-chance" | "second_chance" => Ok(PolicyKind::SecondChance),
            "c" | "clock" => Ok(PolicyKind::Clock),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// A replacement policy together with its bookkeeping.
///
/// Created fresh for each simulation run and owned by the driver.
pub enum Policy {
    Fifo(FifoReplacer),
    Opt(OptReplacer),
    Lru(LruReplacer),
    Lfu(LfuReplacer),
    SecondChance(ClockReplacer),
    Clock(ClockReplacer),
}

impl Policy {
    /// Fresh policy state for a table of `num_frames` slots.
    pub fn new(kind: PolicyKind, num_frames: usize) -> Self {
        match kind {
            PolicyKind::Fifo => Policy::Fifo(FifoReplacer::new(num_frames)),
            PolicyKind::Opt => Policy::Opt(OptReplacer::new()),
            PolicyKind::Lru => Policy::Lru(LruReplacer::new(num_frames)),
            PolicyKind::Lfu => Policy::Lfu(LfuReplacer::new(num_frames)),
            PolicyKind::SecondChance => {
                Policy::SecondChance(ClockReplacer::second_chance(num_frames))
            }
            PolicyKind::Clock => Policy::Clock(ClockReplacer::clock(num_frames)),
        }
    }

    /// Which policy this is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fifo(_) => PolicyKind::Fifo,
            Policy::Opt(_) => PolicyKind::Opt,
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Lfu(_) => PolicyKind::Lfu,
            Policy::SecondChance(_) => PolicyKind::SecondChance,
            Policy::Clock(_) => PolicyKind::Clock,
        }
    }

    /// The referenced page was already resident in `frame_id`.
    pub fn record_hit(&mut self, frame_id: FrameId) {
        match self {
            Policy::Fifo(_) | Policy::Opt(_) => {}
            Policy::Lru(r) => r.record_access(frame_id),
            Policy::Lfu(r) => r.record_hit(frame_id),
            Policy::SecondChance(r) | Policy::Clock(r) => r.record_hit(frame_id),
        }
    }

    /// `page` was just loaded into `frame_id`, either into a free slot or
    /// over a victim.
    pub fn record_load(&mut self, frame_id: FrameId, page: PageId) {
        match self {
            Policy::Fifo(r) => r.record_load(page),
            Policy::Opt(_) => {}
            Policy::Lru(r) => r.record_access(frame_id),
            Policy::Lfu(r) => r.record_load(frame_id),
            Policy::SecondChance(r) | Policy::Clock(r) => r.record_load(frame_id),
        }
    }

    /// Choose the slot to overwrite for the fault at `position`.
    ///
    /// Only called when `table` is full.
    ///
    /// # Errors
    /// - `Error::NoVictim` if the policy state is out of sync with the table
    pub fn select_victim(
        &mut self,
        table: &FrameTable,
        refs: &ReferenceString,
        position: usize,
    ) -> Result<FrameId> {
        let victim = match self {
            Policy::Fifo(r) => r.evict(table),
            Policy::Opt(r) => r.evict(table, refs.after(position)),
            Policy::Lru(r) => r.evict(table),
            Policy::Lfu(r) => r.evict(table),
            Policy::SecondChance(r) | Policy::Clock(r) => r.evict(),
        };
        victim.ok_or(Error::NoVictim)
    }
}
