//! Battle configuration.
//!
//! Hosts configure the deck battle at startup by providing a `DeckConfig`:
//! - hand size and whether the hand survives turn end
//! - which cards never enter the deck
//! - the manual-discard key
//! - the draw command (label and cost)
//!
//! Configs can be built in code with the `with_*` builders or loaded from
//! TOML. Missing fields take their defaults.
//!
//! ```
//! use deck_battle::core::DeckConfig;
//!
//! let config = DeckConfig::from_toml_str(
//!     r#"
//!     hand_size = 4
//!     keep_hand = true
//!
//!     [draw_command]
//!     tp_cost = 5
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.hand_size, 4);
//! assert!(config.keep_hand);
//! assert_eq!(config.draw_command.tp_cost, 5);
//! assert_eq!(config.draw_command.label, "Draw (+1)");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::battle::Cost;
use crate::cards::CardId;

/// Cards drawn at the start of each turn unless configured otherwise.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Key code used when `discard_key` names an unknown key (`c`).
pub const DEFAULT_DISCARD_KEY_CODE: u32 = 67;

/// Errors raised while loading a `DeckConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The in-hand "draw one card" command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawCommandConfig {
    /// Show the command in the hand menu.
    pub enabled: bool,

    /// Menu label.
    pub label: String,

    /// MP spent per use.
    pub mp_cost: u32,

    /// TP spent per use.
    pub tp_cost: u32,
}

impl DrawCommandConfig {
    /// Cost of one use.
    #[must_use]
    pub fn cost(&self) -> Cost {
        Cost::new(self.mp_cost, self.tp_cost)
    }
}

impl Default for DrawCommandConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label: "Draw (+1)".to_string(),
            mp_cost: 0,
            tp_cost: 10,
        }
    }
}

/// Configuration shared by every actor's card pools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Cards drawn when an actor's input phase first opens each turn.
    pub hand_size: usize,

    /// Skip the end-of-turn discard.
    pub keep_hand: bool,

    /// Cards removed from every catalog before the deck is built
    /// (basic attack and guard by default).
    pub excluded_cards: Vec<CardId>,

    /// Key name bound to manual discard.
    pub discard_key: String,

    /// Draw command settings.
    pub draw_command: DrawCommandConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            keep_hand: false,
            excluded_cards: vec![CardId::new(1), CardId::new(2)],
            discard_key: "c".to_string(),
            draw_command: DrawCommandConfig::default(),
        }
    }
}

impl DeckConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards drawn per turn.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Keep the hand across turn end.
    #[must_use]
    pub fn with_keep_hand(mut self, keep_hand: bool) -> Self {
        self.keep_hand = keep_hand;
        self
    }

    /// Replace the exclusion list.
    #[must_use]
    pub fn with_excluded(mut self, excluded: impl IntoIterator<Item = CardId>) -> Self {
        self.excluded_cards = excluded.into_iter().collect();
        self
    }

    /// Replace the draw command settings.
    #[must_use]
    pub fn with_draw_command(mut self, draw_command: DrawCommandConfig) -> Self {
        self.draw_command = draw_command;
        self
    }

    /// Check if a card is kept out of decks.
    #[must_use]
    pub fn is_excluded(&self, card: CardId) -> bool {
        self.excluded_cards.contains(&card)
    }

    /// Key code for the manual-discard binding.
    ///
    /// Unknown key names fall back to `c`.
    #[must_use]
    pub fn discard_key_code(&self) -> u32 {
        match self.discard_key.trim().to_lowercase().as_str() {
            "c" => 67,
            "d" => 68,
            "s" => 83,
            "a" => 65,
            "w" => 87,
            "shift" => 16,
            "tab" => 9,
            _ => DEFAULT_DISCARD_KEY_CODE,
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
