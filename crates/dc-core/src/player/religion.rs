//! Gods and piety

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A god the player may follow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum God {
    #[default]
    #[strum(serialize = "no god")]
    None,
    Zin,
    #[strum(serialize = "the Shining One")]
    ShiningOne,
    Elyvilon,
    Trog,
    Xom,
    Ashenzari,
    Dithmenos,
}

impl God {
    /// Shields followers from unnatural transformation
    pub const fn protects_from_polymorph(&self) -> bool {
        matches!(self, God::Zin)
    }

    /// Rewards wearing cursed gear; removing it shatters the curse
    pub const fn breaks_curses(&self) -> bool {
        matches!(self, God::Ashenzari)
    }

    /// Forces transformations that the player cannot cancel
    pub const fn forces_forms(&self) -> bool {
        matches!(self, God::Xom)
    }
}

/// The player's religious standing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Religion {
    pub god: God,
    pub piety: i32,
}

impl Religion {
    pub fn worships(&self, god: God) -> bool {
        self.god == god && god != God::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_god_roles() {
        assert!(God::Zin.protects_from_polymorph());
        assert!(God::Ashenzari.breaks_curses());
        assert!(God::Xom.forces_forms());
        assert!(!God::Trog.breaks_curses());
    }

    #[test]
    fn test_worships() {
        let religion = Religion {
            god: God::Zin,
            piety: 100,
        };
        assert!(religion.worships(God::Zin));
        assert!(!Religion::default().worships(God::None));
    }
}
