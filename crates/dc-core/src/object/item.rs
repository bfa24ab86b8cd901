//! Item instances
//!
//! Only the properties the transformation core inspects: what kind of item it
//! is, which slot it is worn in, curse status, and the handful of special
//! properties that interact with melding (flight, holiness, Lear's hauberk).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::EquipSlot;
use crate::player::Stat;

/// Item class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ItemClass {
    Weapon,
    Staff,
    Armour,
    Jewellery,
    Miscellany,
}

/// What kind of jewellery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum JewelleryKind {
    Ring,
    Amulet,
}

bitflags! {
    /// Special item properties
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ItemProps: u16 {
        /// Blessed by the good gods; liches cannot wield it
        const HOLY = 0x0001;
        /// Grants flight while worn
        const FLYING = 0x0002;
        const TWO_HANDED = 0x0004;
        /// Lear's hauberk: body armour that also covers head, hands and feet
        const LEAR = 0x0008;
        /// Naga barding, worn in the boots slot
        const BARDING = 0x0010;
    }
}

/// A single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub class: ItemClass,
    /// Slot an armour item is worn in
    pub armour_slot: Option<EquipSlot>,
    pub jewellery: Option<JewelleryKind>,
    pub quantity: i32,
    pub cursed: bool,
    pub props: ItemProps,
    /// Stat bonus granted while equipped and not melded
    pub stat_bonus: Option<(Stat, i32)>,
}

impl Item {
    fn base(name: impl Into<String>, class: ItemClass) -> Self {
        Self {
            name: name.into(),
            class,
            armour_slot: None,
            jewellery: None,
            quantity: 1,
            cursed: false,
            props: ItemProps::empty(),
            stat_bonus: None,
        }
    }

    pub fn weapon(name: impl Into<String>) -> Self {
        Self::base(name, ItemClass::Weapon)
    }

    pub fn staff(name: impl Into<String>) -> Self {
        Self::base(name, ItemClass::Staff)
    }

    /// Armour worn in `slot`
    pub fn armour(name: impl Into<String>, slot: EquipSlot) -> Self {
        debug_assert!(slot.is_armour(), "{slot} is not an armour slot");
        Self {
            armour_slot: Some(slot),
            ..Self::base(name, ItemClass::Armour)
        }
    }

    pub fn ring(name: impl Into<String>) -> Self {
        Self {
            jewellery: Some(JewelleryKind::Ring),
            ..Self::base(name, ItemClass::Jewellery)
        }
    }

    pub fn amulet(name: impl Into<String>) -> Self {
        Self {
            jewellery: Some(JewelleryKind::Amulet),
            ..Self::base(name, ItemClass::Jewellery)
        }
    }

    pub fn misc(name: impl Into<String>) -> Self {
        Self::base(name, ItemClass::Miscellany)
    }

    pub fn with_curse(mut self) -> Self {
        self.cursed = true;
        self
    }

    pub fn with_props(mut self, props: ItemProps) -> Self {
        self.props |= props;
        self
    }

    pub fn with_stat_bonus(mut self, stat: Stat, amount: i32) -> Self {
        self.stat_bonus = Some((stat, amount));
        self
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Weapons and staves can both be wielded as weapons
    pub const fn is_weapon(&self) -> bool {
        matches!(self.class, ItemClass::Weapon | ItemClass::Staff)
    }

    pub const fn is_armour(&self) -> bool {
        matches!(self.class, ItemClass::Armour)
    }

    pub const fn is_jewellery(&self) -> bool {
        matches!(self.class, ItemClass::Jewellery)
    }

    pub fn is_amulet(&self) -> bool {
        self.jewellery == Some(JewelleryKind::Amulet)
    }

    pub fn is_holy(&self) -> bool {
        self.props.contains(ItemProps::HOLY)
    }

    pub fn grants_flight(&self) -> bool {
        self.props.contains(ItemProps::FLYING)
    }

    pub fn is_lear_hauberk(&self) -> bool {
        self.props.contains(ItemProps::LEAR)
    }

    pub fn is_barding(&self) -> bool {
        self.props.contains(ItemProps::BARDING)
    }

    pub fn is_two_handed(&self) -> bool {
        self.props.contains(ItemProps::TWO_HANDED)
    }

    pub const fn is_plural(&self) -> bool {
        self.quantity != 1
    }

    /// "your <name>"
    pub fn name_your(&self) -> String {
        format!("your {}", self.name)
    }
}

/// A two-handed weapon cannot be used alongside a shield.
pub fn is_shield_incompatible(weapon: &Item, _shield: &Item) -> bool {
    weapon.is_two_handed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let boots = Item::armour("pair of boots", EquipSlot::Boots);
        assert_eq!(boots.armour_slot, Some(EquipSlot::Boots));
        assert!(boots.is_armour());
        assert!(!boots.cursed);

        let amulet = Item::amulet("amulet of faith").with_curse();
        assert!(amulet.is_amulet());
        assert!(amulet.cursed);

        assert!(Item::staff("staff of fire").is_weapon());
        assert!(!Item::ring("ring of flight").is_amulet());
    }

    #[test]
    fn test_props() {
        let blade = Item::weapon("holy blade").with_props(ItemProps::HOLY | ItemProps::TWO_HANDED);
        assert!(blade.is_holy());
        assert!(blade.is_two_handed());
        let shield = Item::armour("buckler", EquipSlot::Shield);
        assert!(is_shield_incompatible(&blade, &shield));
        assert!(!is_shield_incompatible(&Item::weapon("dagger"), &shield));
    }

    #[test]
    fn test_naming() {
        let darts = Item::weapon("darts").with_quantity(5);
        assert!(darts.is_plural());
        assert_eq!(darts.name_your(), "your darts");
    }
}
