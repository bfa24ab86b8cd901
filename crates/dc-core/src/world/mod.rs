//! World state
//!
//! Configuration, failure reasons and the message log.

pub mod errors;
pub mod messages;
pub mod options;

pub use errors::TransformError;
pub use messages::{Message, MessageChannel};
pub use options::{GameOptions, OptionsError};
