//! Submenu slots: the expandable panels attached to bar options.

pub mod arena;
pub mod slot;

pub use arena::SlotArena;
pub use slot::{SlotId, SubmenuSlot, SubmenuSpec};
