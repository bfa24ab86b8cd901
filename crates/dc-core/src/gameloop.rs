//! Game state context
//!
//! `GameState` bundles everything a transformation touches: the player, the
//! level they stand on, the generator, the options and the message log.
//! Every operation takes it explicitly; there is no global player.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::GameRng;
use crate::consts::TRANSFORM_WARN_TURNS;
use crate::dungeon::Level;
use crate::player::{Duration, God, You};
use crate::transform::{Transformation, untransform};
use crate::world::{GameOptions, Message, MessageChannel};

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Player character
    pub player: You,

    /// Current level
    pub level: Level,

    /// Random number generator
    pub rng: GameRng,

    pub options: GameOptions,

    /// God acting on the player right now (a forced transformation, a gift)
    #[serde(default)]
    pub acting_god: Option<God>,

    /// Turns elapsed
    pub turns: u64,

    /// Messages produced since the last clear
    #[serde(skip)]
    pub messages: Vec<Message>,

    /// Recent messages, capped at `options.msghistory`
    #[serde(skip)]
    pub message_history: VecDeque<Message>,
}

impl GameState {
    /// New game with a fixed seed
    pub fn new(player: You, seed: u64) -> Self {
        let options = GameOptions {
            seed: Some(seed),
            ..GameOptions::default()
        };
        Self::with_options(player, options)
    }

    /// New game configured by `options`; without an explicit seed the
    /// generator is seeded from entropy.
    pub fn with_options(player: You, options: GameOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::debug!(seed = rng.seed(), "game state created");
        Self {
            player,
            level: Level::default(),
            rng,
            options,
            acting_god: None,
            turns: 0,
            messages: Vec::new(),
            message_history: VecDeque::new(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.message_on(MessageChannel::Plain, msg);
    }

    /// Add a message on a specific channel
    pub fn message_on(&mut self, channel: MessageChannel, msg: impl Into<String>) {
        let msg = Message::new(channel, msg);
        self.messages.push(msg.clone());
        self.message_history.push_back(msg);
        while self.message_history.len() > self.options.msghistory {
            self.message_history.pop_front();
        }
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Text of the pending messages, oldest first
    pub fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.text.as_str()).collect()
    }

    /// Time units in one turn
    pub fn baseline_delay(&self) -> i32 {
        self.options.baseline_delay
    }

    /// Count down the current transformation by `elapsed` time units, ending
    /// it when it runs out.
    pub fn decrement_transform_duration(&mut self, elapsed: i32) {
        if self.player.form == Transformation::None {
            return;
        }

        let warn_at = TRANSFORM_WARN_TURNS * self.baseline_delay();
        let before = self.player.durations.get(Duration::Transformation);
        if self
            .player
            .durations
            .decrement(Duration::Transformation, elapsed)
        {
            tracing::debug!(form = %self.player.form, "transformation expired");
            untransform(self, false);
            return;
        }

        let after = self.player.durations.get(Duration::Transformation);
        if before > warn_at && after <= warn_at {
            self.message_on(
                MessageChannel::Warning,
                "Your transformation is almost over.",
            );
        }
    }
}
