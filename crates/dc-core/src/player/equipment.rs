//! Equipped items
//!
//! Each slot owns at most one item. A melded item stays in its slot but
//! contributes none of its effects; the melded set is always a subset of the
//! occupied slots.

use serde::{Deserialize, Serialize};

use crate::object::{EquipSlot, Item, NUM_EQUIP, SlotMask};

/// The player's equipped items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    slots: [Option<Item>; NUM_EQUIP],
    melded: SlotMask,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            melded: SlotMask::empty(),
        }
    }
}

impl Equipment {
    /// Item in `slot`, melded or not
    pub fn item(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots[slot.index()].as_ref()
    }

    /// Item in `slot` if it is actively worn (not melded)
    pub fn worn(&self, slot: EquipSlot) -> Option<&Item> {
        if self.is_melded(slot) {
            None
        } else {
            self.item(slot)
        }
    }

    pub fn is_melded(&self, slot: EquipSlot) -> bool {
        self.melded.has(slot)
    }

    pub fn melded(&self) -> SlotMask {
        self.melded
    }

    /// Slots holding an item
    pub fn occupied(&self) -> SlotMask {
        self.iter().map(|(slot, _)| slot).collect()
    }

    /// Every equipped item in canonical slot order
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &Item)> {
        SlotMask::all()
            .slots()
            .filter_map(|slot| self.item(slot).map(|item| (slot, item)))
    }

    /// Actively worn items in canonical slot order
    pub fn iter_worn(&self) -> impl Iterator<Item = (EquipSlot, &Item)> {
        self.iter().filter(|(slot, _)| !self.is_melded(*slot))
    }

    /// Put an item in a slot, returning whatever was there
    pub fn put(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        self.melded.remove(slot.mask());
        self.slots[slot.index()].replace(item)
    }

    /// Empty a slot
    pub fn take(&mut self, slot: EquipSlot) -> Option<Item> {
        self.melded.remove(slot.mask());
        self.slots[slot.index()].take()
    }

    /// Mark an occupied slot melded; true if it was not melded before
    pub fn meld(&mut self, slot: EquipSlot) -> bool {
        if self.item(slot).is_none() || self.is_melded(slot) {
            return false;
        }
        self.melded.insert(slot.mask());
        true
    }

    /// Clear the melded mark; true if the slot was melded
    pub fn unmeld(&mut self, slot: EquipSlot) -> bool {
        let was = self.is_melded(slot);
        self.melded.remove(slot.mask());
        was
    }
}
