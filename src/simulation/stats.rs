//! Simulation statistics tracking.

use std::fmt;

/// Counters accumulated by the driver over one run.
///
/// The driver is single-threaded, so these are plain integers.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.references, 2);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of references processed.
    pub references: u64,

    /// Number of references found resident.
    pub hits: u64,

    /// Number of references that were not resident.
    pub faults: u64,

    /// Number of faults that displaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a hit.
    pub fn record_hit(&mut self) {
        self.references += 1;
        self.hits += 1;
    }

    /// Count a fault, and an eviction if one was needed.
    pub fn record_fault(&mut self, evicted: bool) {
        self.references += 1;
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SimulationStats::new();
        assert_eq!(stats.references, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_increment() {
        let mut stats = SimulationStats::new();
        for _ in 0..7 {
            stats.record_hit();
        }
        stats.record_fault(false);
        stats.record_fault(true);
        stats.record_fault(true);

        assert_eq!(stats.references, 10);
        assert_eq!(stats.faults, 3);
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = SimulationStats::new();
        for _ in 0..4 {
            stats.record_hit();
        }
        stats.record_fault(true);

        let display = format!("{}", stats);
        assert!(display.contains("hits: 4"));
        assert!(display.contains("faults: 1"));
        assert!(display.contains("80.00%"));
    }
}
