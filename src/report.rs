//! Column-aligned text reports.
//!
//! One line per trace record:
//!
//! ```text
//!  4 -> |  4 |  2 |  3 | FAULT
//! ```
//!
//! The reference, then every slot right-aligned to the widest reference in
//! the string (blank for an empty slot), then a fault marker. A blank line
//! and the total fault count close the report.

use std::io::Write;

use crate::common::Result;
use crate::frame::TraceRecord;
use crate::policy::PolicyKind;
use crate::reference::ReferenceString;
use crate::simulation::SimulationStats;

/// Renders trace records to a writer.
pub struct TraceRenderer<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TraceRenderer<W> {
    /// Renderer with an explicit column width.
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    /// Renderer sized to the widest reference in `refs`.
    pub fn for_refs(out: W, refs: &ReferenceString) -> Self {
        Self::new(out, refs.display_width())
    }

    /// Write one trace line.
    pub fn write_record(&mut self, record: &TraceRecord) -> Result<()> {
        let w = self.width;
        write!(self.out, "{:>w$} -> ", record.reference.0)?;

        for slot in &record.frame_snapshot {
            match slot {
                Some(page) => write!(self.out, "| {:>w$} ", page.0)?,
                None => write!(self.out, "| {:>w$} ", "")?,
            }
        }
        write!(self.out, "|")?;

        if record.is_fault {
            write!(self.out, " FAULT")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Write the closing fault count.
    pub fn write_total(&mut self, faults: u64) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "page faults: {}", faults)?;
        self.out.flush()?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write one summary row per policy.
pub fn write_comparison<W: Write>(
    out: &mut W,
    results: &[(PolicyKind, SimulationStats)],
) -> Result<()> {
    writeln!(
        out,
        "{:<14} {:>10} {:>10} {:>10} {:>9}",
        "policy", "faults", "hits", "evictions", "hit rate"
    )?;
    for (kind, stats) in results {
        writeln!(
            out,
            "{:<14} {:>10} {:>10} {:>10} {:>8.2}%",
            kind.to_string(),
            stats.faults,
            stats.hits,
            stats.evictions,
            stats.hit_rate() * 100.0
        )?;
    }
    out.flush()?;
    Ok(())
}
