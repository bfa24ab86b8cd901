//! Transformation failure reasons
//!
//! Every way a transformation request can be refused. The `Display` text is
//! exactly what the player is shown, so callers can hand it straight to the
//! message log.

use thiserror::Error;

use crate::player::God;

/// Why a transformation request was refused.
///
/// None of these leave any trace on the player: a refused request changes
/// neither form, equipment nor durations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("{god} protects your body from unnatural transformation!")]
    Vetoed { god: God },

    #[error("You are stuck in your current form!")]
    Stuck,

    #[error("You would drown in your new form.")]
    WouldDrown,

    #[error("You would burn in your new form.")]
    WouldBurn,

    #[error("Your unliving flesh cannot be transformed in this way.")]
    TooDead,

    #[error("Your blood-filled body can't sustain this transformation.")]
    TooAlive,

    #[error("You cannot become a lich while in death's door.")]
    DeathsDoor,

    #[error("You have no appropriate body parts free.")]
    NoFreeBodyParts,

    #[error("Okay, then.")]
    Cancelled,
}

impl TransformError {
    /// The player backed out of a confirmation prompt.
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, TransformError::Cancelled)
    }

    /// A god intervened; shown even for involuntary requests.
    pub const fn is_divine(&self) -> bool {
        matches!(self, TransformError::Vetoed { .. })
    }
}
