//! Error types for pagesim.

use std::path::PathBuf;

use thiserror::Error;

use crate::common::FrameId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The first three variants are setup errors: they are reported before the
/// first reference is simulated. The remaining ones indicate a broken
/// internal invariant or a failed write of the report.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested frame count is below one.
    #[error("Invalid number of frames {0}: expected positive integer")]
    InvalidCapacity(i64),

    /// The policy name does not match any known policy.
    #[error("Unknown page replacement algorithm {0}")]
    UnknownPolicy(String),

    /// The reference string source could not be read.
    #[error("Failed to open {} for input: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page was inserted into a frame table with no empty slot.
    ///
    /// The driver checks `is_full()` first, so this indicates a bug.
    #[error("Frame table is full")]
    Capacity,

    /// A slot chosen for replacement holds no page.
    ///
    /// Victims always come from occupied slots, so this indicates a bug.
    #[error("{0} is not occupied")]
    EmptySlot(FrameId),

    /// A policy was asked for a victim but had no candidate.
    ///
    /// Every policy is total over a full table, so this indicates a bug.
    #[error("No victim available for eviction")]
    NoVictim,

    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
