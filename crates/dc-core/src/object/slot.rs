//! Equipment slots
//!
//! `EquipSlot` declares the canonical slot order. Every walk over a
//! `SlotMask` follows that order, so melding and unmelding emit their
//! messages in the same sequence every time.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// An equipment slot, in canonical order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum EquipSlot {
    #[strum(serialize = "weapon")]
    Weapon = 0,
    #[strum(serialize = "cloak")]
    Cloak,
    #[strum(serialize = "helmet")]
    Helmet,
    #[strum(serialize = "gloves")]
    Gloves,
    #[strum(serialize = "boots")]
    Boots,
    #[strum(serialize = "shield")]
    Shield,
    #[strum(serialize = "body armour")]
    BodyArmour,
    #[strum(serialize = "left ring")]
    LeftRing,
    #[strum(serialize = "right ring")]
    RightRing,
    #[strum(serialize = "amulet")]
    Amulet,
    #[strum(serialize = "ring one")]
    RingOne,
    #[strum(serialize = "ring two")]
    RingTwo,
    #[strum(serialize = "ring three")]
    RingThree,
    #[strum(serialize = "ring four")]
    RingFour,
    #[strum(serialize = "ring five")]
    RingFive,
    #[strum(serialize = "ring six")]
    RingSix,
    #[strum(serialize = "ring seven")]
    RingSeven,
    #[strum(serialize = "ring eight")]
    RingEight,
    /// Ring setting on an amulet
    #[strum(serialize = "ring amulet")]
    RingAmulet,
}

/// Number of equipment slots
pub const NUM_EQUIP: usize = EquipSlot::COUNT;

impl EquipSlot {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single-slot mask for this slot
    pub const fn mask(self) -> SlotMask {
        SlotMask::from_bits_retain(1 << self as u32)
    }

    pub const fn is_armour(self) -> bool {
        matches!(
            self,
            EquipSlot::Cloak
                | EquipSlot::Helmet
                | EquipSlot::Gloves
                | EquipSlot::Boots
                | EquipSlot::Shield
                | EquipSlot::BodyArmour
        )
    }

    pub const fn is_ring(self) -> bool {
        matches!(
            self,
            EquipSlot::LeftRing
                | EquipSlot::RightRing
                | EquipSlot::RingOne
                | EquipSlot::RingTwo
                | EquipSlot::RingThree
                | EquipSlot::RingFour
                | EquipSlot::RingFive
                | EquipSlot::RingSix
                | EquipSlot::RingSeven
                | EquipSlot::RingEight
                | EquipSlot::RingAmulet
        )
    }
}

bitflags! {
    /// A set of equipment slots
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SlotMask: u32 {
        const WEAPON = 1 << 0;
        const CLOAK = 1 << 1;
        const HELMET = 1 << 2;
        const GLOVES = 1 << 3;
        const BOOTS = 1 << 4;
        const SHIELD = 1 << 5;
        const BODY_ARMOUR = 1 << 6;
        const LEFT_RING = 1 << 7;
        const RIGHT_RING = 1 << 8;
        const AMULET = 1 << 9;
        const RING_ONE = 1 << 10;
        const RING_TWO = 1 << 11;
        const RING_THREE = 1 << 12;
        const RING_FOUR = 1 << 13;
        const RING_FIVE = 1 << 14;
        const RING_SIX = 1 << 15;
        const RING_SEVEN = 1 << 16;
        const RING_EIGHT = 1 << 17;
        const RING_AMULET = 1 << 18;

        /// Everything held or worn on the hands
        const HANDS = Self::WEAPON.bits() | Self::SHIELD.bits() | Self::GLOVES.bits();
        /// Head and feet
        const HEAD_FOOT = Self::BOOTS.bits() | Self::HELMET.bits();
        /// Slots a statue body cannot use
        const STATUE = Self::GLOVES.bits() | Self::BOOTS.bits() | Self::BODY_ARMOUR.bits();
        /// Slots covered by Lear's hauberk
        const LEAR = Self::STATUE.bits() | Self::HELMET.bits();
        /// All worn armour
        const WEAR = Self::LEAR.bits() | Self::CLOAK.bits() | Self::SHIELD.bits();
        /// Weapon and all armour
        const PHYSICAL = Self::HANDS.bits() | Self::WEAR.bits();
        const RINGS = Self::LEFT_RING.bits()
            | Self::RIGHT_RING.bits()
            | Self::RING_ONE.bits()
            | Self::RING_TWO.bits()
            | Self::RING_THREE.bits()
            | Self::RING_FOUR.bits()
            | Self::RING_FIVE.bits()
            | Self::RING_SIX.bits()
            | Self::RING_SEVEN.bits()
            | Self::RING_EIGHT.bits();
        const AMULETS = Self::AMULET.bits() | Self::RING_AMULET.bits();
    }
}

impl SlotMask {
    /// Slots in this set, in canonical order
    pub fn slots(self) -> impl Iterator<Item = EquipSlot> {
        EquipSlot::iter().filter(move |slot| self.contains(slot.mask()))
    }

    pub fn has(self, slot: EquipSlot) -> bool {
        self.contains(slot.mask())
    }
}

impl From<EquipSlot> for SlotMask {
    fn from(slot: EquipSlot) -> Self {
        slot.mask()
    }
}

impl FromIterator<EquipSlot> for SlotMask {
    fn from_iter<I: IntoIterator<Item = EquipSlot>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SlotMask::empty(), |mask, slot| mask | slot.mask())
    }
}
