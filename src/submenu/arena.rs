//! Slotmap-backed storage for the submenu slots of one bar.

use slotmap::SlotMap;

use super::slot::{SlotId, SubmenuSlot};

/// Owns every submenu slot of a bar.
///
/// Options refer to their slot by [`SlotId`]. Destroying a slot leaves the id
/// stale, so later size requests on it are detected and dropped instead of
/// touching a different slot.
#[derive(Debug, Default)]
pub struct SlotArena {
    slots: SlotMap<SlotId, SubmenuSlot>,
}

impl SlotArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    /// Store a slot and return its handle.
    pub fn insert(&mut self, slot: SubmenuSlot) -> SlotId {
        self.slots.insert(slot)
    }

    /// Destroy a slot. Returns its last state, or `None` if it was already gone.
    pub fn remove(&mut self, id: SlotId) -> Option<SubmenuSlot> {
        self.slots.remove(id)
    }

    pub fn get(&self, id: SlotId) -> Option<&SubmenuSlot> {
        self.slots.get(id)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut SubmenuSlot> {
        self.slots.get_mut(id)
    }

    /// Whether `id` still refers to a live slot.
    pub fn contains(&self, id: SlotId) -> bool {
        self.slots.contains_key(id)
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over live slots in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &SubmenuSlot)> {
        self.slots.iter()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
