//! dc-core: Player transformation core for a dungeon crawl roguelike
//!
//! This crate holds the form registry, the equipment melding controller and
//! the transformation state machine, together with the slice of player,
//! item and terrain state they act on. There is no I/O here; every player
//! facing line of text goes through [`GameState::message`].

pub mod consts;
pub mod dungeon;
pub mod gameloop;
pub mod monster;
pub mod object;
pub mod player;
pub mod transform;
pub mod world;

pub use dc_rng::GameRng;
pub use gameloop::GameState;
