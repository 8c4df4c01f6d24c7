//! Simulation driver.
//!
//! # Components
//! - [`Simulator`] - Steps one policy over one reference string
//! - [`SimulationStats`] - Hit/fault counters for a run
//! - [`run_simulation`] - Convenience wrapper collecting the whole trace
//! - [`compare_policies`] - Runs every policy over the same string

mod simulator;
mod stats;

pub use simulator::Simulator;
pub use stats::SimulationStats;

use crate::common::{Result, SimulationConfig};
use crate::frame::TraceRecord;
use crate::policy::PolicyKind;
use crate::reference::ReferenceString;

/// Simulate `policy` over `refs` with `num_frames` slots.
///
/// Returns every trace record together with the total number of faults.
/// For long strings prefer [`Simulator::run_with`], which streams.
///
/// # Errors
/// - `Error::InvalidCapacity` if `num_frames < 1`
///
/// # Example
/// ```
/// use pagesim::{run_simulation, PolicyKind, ReferenceString};
///
/// let refs = ReferenceString::from(vec![1, 2, 3, 4, 1, 2, 5]);
/// let (trace, faults) = run_simulation(&refs, 3, PolicyKind::Fifo).unwrap();
/// assert_eq!(trace.len(), 7);
/// assert_eq!(faults, 7);
/// ```
pub fn run_simulation(
    refs: &ReferenceString,
    num_frames: i64,
    policy: PolicyKind,
) -> Result<(Vec<TraceRecord>, u64)> {
    let config = SimulationConfig::new(num_frames, policy)?;

    let mut trace = Vec::with_capacity(refs.len());
    let stats = Simulator::new(refs, config).run_with(|record| {
        trace.push(record.clone());
        Ok(())
    })?;

    Ok((trace, stats.faults))
}

/// Run every policy over `refs` and collect the statistics of each.
///
/// Each run gets its own frame table and policy state; only the reference
/// string is shared.
///
/// # Errors
/// - `Error::InvalidCapacity` if `num_frames < 1`
pub fn compare_policies(
    refs: &ReferenceString,
    num_frames: i64,
) -> Result<Vec<(PolicyKind, SimulationStats)>> {
    let config = SimulationConfig::new(num_frames, PolicyKind::Fifo)?;

    PolicyKind::ALL
        .iter()
        .map(|&kind| -> Result<(PolicyKind, SimulationStats)> {
            let stats = Simulator::new(refs, config.with_policy(kind)).run_with(|_| Ok(()))?;
            Ok((kind, stats))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_run_simulation_rejects_zero_frames() {
        let refs = ReferenceString::from(vec![1, 2]);
        assert!(matches!(
            run_simulation(&refs, 0, PolicyKind::Lru),
            Err(Error::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_empty_reference_string() {
        let refs = ReferenceString::default();
        for kind in PolicyKind::ALL {
            let (trace, faults) = run_simulation(&refs, 3, kind).unwrap();
            assert!(trace.is_empty());
            assert_eq!(faults, 0);
        }
    }

    #[test]
    fn test_compare_policies() {
        let refs = ReferenceString::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let results = compare_policies(&refs, 3).unwrap();

        assert_eq!(results.len(), PolicyKind::ALL.len());
        let fifo = results[0].1;
        let opt = results[1].1;
        assert_eq!(results[0].0, PolicyKind::Fifo);
        assert_eq!(fifo.faults, 9);
        assert_eq!(opt.faults, 7);
        assert!(results.iter().all(|(_, s)| s.references == 12));
    }
}
