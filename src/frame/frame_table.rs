//! FrameTable - the fixed array of resident-page slots.

use crate::common::{Error, FrameId, PageId, Result};

/// A fixed-capacity, ordered array of slots.
///
/// Each slot is either empty (`None`) or holds one resident page. Slots fill
/// left to right in arrival order; once every slot is occupied, a page only
/// ever enters by overwriting a victim slot in place, so slot positions are
/// stable for display.
///
/// # Invariants
/// - `occupied` equals the number of `Some` slots, and all of them are at
///   indices `0..occupied`.
/// - No page appears in more than one slot.
///
/// # Example
/// ```
/// use pagesim::{FrameId, FrameTable, PageId};
///
/// let mut table = FrameTable::new(2);
/// assert_eq!(table.insert_into_free_slot(PageId::new(7)).unwrap(), FrameId::new(0));
/// assert_eq!(table.lookup(PageId::new(7)), Some(FrameId::new(0)));
/// assert!(!table.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    /// Slot contents, indexed by `FrameId`.
    slots: Vec<Option<PageId>>,

    /// Number of occupied slots (always a prefix of `slots`).
    occupied: usize,
}

impl FrameTable {
    /// Create a table with `num_frames` empty slots.
    ///
    /// # Panics
    /// Panics if `num_frames` is 0. Use [`SimulationConfig`] to validate
    /// user input first.
    ///
    /// [`SimulationConfig`]: crate::SimulationConfig
    pub fn new(num_frames: usize) -> Self {
        assert!(num_frames > 0, "num_frames must be > 0");

        Self {
            slots: vec![None; num_frames],
            occupied: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Find the slot holding `page`, if it is resident.
    ///
    /// Linear scan; frame tables are small.
    pub fn lookup(&self, page: PageId) -> Option<FrameId> {
        self.slots[..self.occupied]
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    /// True once every slot holds a page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// True if no page has been loaded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Contents of one slot.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots[frame_id.0]
    }

    /// All slots in display order.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Occupied slots with their ids, in ascending slot order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots[..self.occupied]
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|page| (FrameId::new(i), page)))
    }

    /// Copy of the current slot contents.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Place `page` in the next empty slot and return that slot.
    ///
    /// # Errors
    /// - `Error::Capacity` if the table is already full
    pub fn insert_into_free_slot(&mut self, page: PageId) -> Result<FrameId> {
        if self.is_full() {
            return Err(Error::Capacity);
        }
        debug_assert!(self.lookup(page).is_none(), "page already resident");

        let frame_id = FrameId::new(self.occupied);
        self.slots[frame_id.0] = Some(page);
        self.occupied += 1;

        Ok(frame_id)
    }

    /// Overwrite an occupied slot in place, returning the evicted page.
    ///
    /// # Errors
    /// - `Error::EmptySlot` if `frame_id` is out of range or not occupied;
    ///   the table is left unchanged
    pub fn replace_slot(&mut self, frame_id: FrameId, page: PageId) -> Result<PageId> {
        debug_assert!(self.lookup(page).is_none(), "page already resident");

        self.slots[..self.occupied]
            .get_mut(frame_id.0)
            .and_then(|slot| slot.replace(page))
            .ok_or(Error::EmptySlot(frame_id))
    }
}
