//! Player system
//!
//! Contains the You struct and the player state the transformation core
//! reads and mutates.

mod attributes;
mod durations;
mod equipment;
mod mutation;
mod religion;
mod species;
mod you;

pub use attributes::{Stat, Stats};
pub use durations::{Duration, Durations};
pub use equipment::Equipment;
pub use mutation::{MutationDef, MutationType, Mutations};
pub use religion::{God, Religion};
pub use species::{Species, UndeadState};
pub use you::{Constrictor, Death, DeathCause, DelayKind, HeldBy, Redraw, You};
