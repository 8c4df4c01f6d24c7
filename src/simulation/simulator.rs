//! Simulator - steps a reference string through a frame table.
//!
//! The [`Simulator`] provides:
//! - One trace record per reference, produced lazily
//! - Policy notification on hits, loads and evictions
//! - Running statistics and the final fault count

use log::{debug, info};

use crate::common::{FrameId, PageId, Result, SimulationConfig};
use crate::frame::{FrameTable, TraceRecord};
use crate::policy::{Policy, PolicyKind};
use crate::reference::ReferenceString;
use crate::simulation::SimulationStats;

/// Drives one policy over one reference string.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                        Simulator                          │
/// │  ┌──────────────┐   ┌──────────┐   ┌──────────────────┐   │
/// │  │ refs (&, RO) │──▶│  policy  │──▶│   frame table    │   │
/// │  │ position: i  │   │  (enum)  │   │ [s0] [s1] [s2]   │   │
/// │  └──────────────┘   └──────────┘   └──────────────────┘   │
/// │                          │                                │
/// │                          ▼                                │
/// │                  TraceRecord + stats                      │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// The frame table and policy state are owned exclusively by the simulator;
/// the reference string is borrowed, so several simulators can replay the
/// same string independently.
///
/// # Usage
/// ```
/// use pagesim::{PolicyKind, ReferenceString, SimulationConfig, Simulator};
///
/// let refs = ReferenceString::from(vec![1, 2, 1]);
/// let config = SimulationConfig::new(2, PolicyKind::Lru).unwrap();
///
/// let records: Vec<_> = Simulator::new(&refs, config)
///     .collect::<pagesim::Result<_>>()
///     .unwrap();
/// assert_eq!(records.len(), 3);
/// assert!(!records[2].is_fault);
/// ```
pub struct Simulator<'a> {
    /// Full reference string (read-only, needed for lookahead).
    refs: &'a ReferenceString,

    /// Resident pages.
    table: FrameTable,

    /// Active policy and its bookkeeping.
    policy: Policy,

    /// Index of the next reference to process.
    position: usize,

    /// Counters for this run.
    stats: SimulationStats,
}

impl<'a> Simulator<'a> {
    /// Create a simulator with an empty frame table and fresh policy state.
    pub fn new(refs: &'a ReferenceString, config: SimulationConfig) -> Self {
        let num_frames = config.num_frames();

        info!(
            "simulating {} references with {} frames using {}",
            refs.len(),
            num_frames,
            config.policy()
        );

        Self {
            refs,
            table: FrameTable::new(num_frames),
            policy: Policy::new(config.policy(), num_frames),
            position: 0,
            stats: SimulationStats::new(),
        }
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    /// Process the next reference.
    ///
    /// Returns `Ok(None)` once the reference string is exhausted.
    ///
    /// # Errors
    /// - `Error::NoVictim`, `Error::Capacity` or `Error::EmptySlot` if policy
    ///   state and frame table disagree (never happens for a correct policy)
    pub fn step(&mut self) -> Result<Option<TraceRecord>> {
        let Some(&page) = self.refs.as_slice().get(self.position) else {
            return Ok(None);
        };

        let record = match self.table.lookup(page) {
            Some(frame_id) => {
                self.policy.record_hit(frame_id);
                self.stats.record_hit();
                self.record(page, frame_id, false, None)
            }
            None if !self.table.is_full() => {
                let frame_id = self.table.insert_into_free_slot(page)?;
                self.policy.record_load(frame_id, page);
                self.stats.record_fault(false);

                debug!("ref #{}: {} loaded into free {}", self.position, page, frame_id);
                self.record(page, frame_id, true, None)
            }
            None => {
                let victim = self
                    .policy
                    .select_victim(&self.table, self.refs, self.position)?;
                let evicted = self.table.replace_slot(victim, page)?;
                self.policy.record_load(victim, page);
                self.stats.record_fault(true);

                debug!(
                    "ref #{}: {} evicted {} from {}",
                    self.position, page, evicted, victim
                );
                self.record(page, victim, true, Some(evicted))
            }
        };

        self.position += 1;
        Ok(Some(record))
    }

    fn record(
        &self,
        reference: PageId,
        slot: FrameId,
        is_fault: bool,
        evicted: Option<PageId>,
    ) -> TraceRecord {
        TraceRecord {
            reference,
            frame_snapshot: self.table.snapshot(),
            is_fault,
            slot,
            evicted,
        }
    }

    /// Run to completion, handing each record to `sink` as it is produced.
    ///
    /// Records are streamed, not accumulated. Returns the final statistics.
    ///
    /// # Errors
    /// Propagates errors from stepping and from `sink`.
    pub fn run_with<F>(mut self, mut sink: F) -> Result<SimulationStats>
    where
        F: FnMut(&TraceRecord) -> Result<()>,
    {
        while let Some(record) = self.step()? {
            sink(&record)?;
        }

        info!("{} finished: {}", self.policy.kind(), self.stats);
        Ok(self.stats)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Statistics so far.
    #[inline]
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Faults so far.
    #[inline]
    pub fn total_faults(&self) -> u64 {
        self.stats.faults
    }

    /// Current frame table.
    #[inline]
    pub fn frame_table(&self) -> &FrameTable {
        &self.table
    }

    /// Active policy.
    #[inline]
    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// True once every reference has been processed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.position >= self.refs.len()
    }
}

impl Iterator for Simulator<'_> {
    type Item = Result<TraceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}
