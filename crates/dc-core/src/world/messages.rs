//! Player-facing messages
//!
//! Messages carry a channel so a front end can colour or filter them.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Message channel (colour class)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MessageChannel {
    #[default]
    Plain,
    /// Something timed started or stopped
    Duration,
    Warning,
    God,
    Prompt,
}

/// One line in the message log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub channel: MessageChannel,
    pub text: String,
}

impl Message {
    pub fn new(channel: MessageChannel, text: impl Into<String>) -> Self {
        Self {
            channel,
            text: text.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Capitalise the first letter of a message built from a lower-case name.
pub fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join words as "a", "a and b", "a, b and c".
pub fn comma_separated_line<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_first() {
        assert_eq!(uppercase_first("your gloves"), "Your gloves");
        assert_eq!(uppercase_first(""), "");
    }

    #[test]
    fn test_comma_separated_line() {
        assert_eq!(comma_separated_line::<&str>(&[]), "");
        assert_eq!(comma_separated_line(&["horns"]), "horns");
        assert_eq!(comma_separated_line(&["horns", "talons"]), "horns and talons");
        assert_eq!(
            comma_separated_line(&["horns", "a spike", "talons"]),
            "horns, a spike and talons"
        );
    }

    #[test]
    fn test_message_display() {
        let msg = Message::new(MessageChannel::God, "Zin is displeased.");
        assert_eq!(msg.to_string(), "Zin is displeased.");
    }
}
