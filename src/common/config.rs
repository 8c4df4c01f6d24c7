//! Simulation configuration.

use crate::common::{Error, Result};
use crate::policy::PolicyKind;

/// Smallest usable frame table.
pub const MIN_FRAMES: usize = 1;

/// Parameters of a single simulation run.
///
/// Built through [`SimulationConfig::new`], which rejects a frame count
/// below [`MIN_FRAMES`]. Once built, a config is always valid.
///
/// # Example
/// ```
/// use pagesim::{PolicyKind, SimulationConfig};
///
/// let config = SimulationConfig::new(3, PolicyKind::Lru).unwrap();
/// assert_eq!(config.num_frames(), 3);
///
/// assert!(SimulationConfig::new(0, PolicyKind::Fifo).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    num_frames: usize,
    policy: PolicyKind,
}

impl SimulationConfig {
    /// Validate the frame count and build a config.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `num_frames < 1`
    pub fn new(num_frames: i64, policy: PolicyKind) -> Result<Self> {
        let frames = usize::try_from(num_frames).map_err(|_| Error::InvalidCapacity(num_frames))?;
        if frames < MIN_FRAMES {
            return Err(Error::InvalidCapacity(num_frames));
        }

        Ok(Self {
            num_frames: frames,
            policy,
        })
    }

    /// Number of slots in the frame table.
    #[inline]
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Replacement policy driving the run.
    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Same frame count, different policy.
    pub fn with_policy(self, policy: PolicyKind) -> Self {
        Self { policy, ..self }
    }
}

/// Read a frame count the way C's `strtol` does.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of digits; anything after it is ignored. Text with no leading digits, or
/// digits that overflow, reads as 0 so it is rejected as an invalid capacity.
///
/// # Example
/// ```
/// use pagesim::parse_frame_count;
///
/// assert_eq!(parse_frame_count("3"), 3);
/// assert_eq!(parse_frame_count("4abc"), 4);
/// assert_eq!(parse_frame_count("abc"), 0);
/// ```
pub fn parse_frame_count(s: &str) -> i64 {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    s[..sign_len + digits_len].parse().unwrap_or(0)
}
