//! Object system
//!
//! Items and the equipment slots they occupy.

mod item;
mod slot;

pub use item::{Item, ItemClass, ItemProps, JewelleryKind, is_shield_incompatible};
pub use slot::{EquipSlot, NUM_EQUIP, SlotMask};
