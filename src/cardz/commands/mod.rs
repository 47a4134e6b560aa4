//! # Command Layer
//!
//! One function per user action. Commands call into the core (card store,
//! visibility controller, move mode) and return a structured [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Unsaved Changes
//!
//! A failed write is not fatal. The in-memory collection is still correct, so
//! commands report [`CardzError::StorageUnavailable`] as a warning message, set
//! [`CmdResult::unsaved`], and return normally. Every other error propagates.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a card
//! - [`update`]: Edit a card in place (or create it under a given id)
//! - [`delete`]: Remove cards
//! - [`reorder`]: Replace the display order
//! - [`hide`]: The three-way hide toggle
//! - [`keep`]: Mark hidden cards to come back when reveal mode closes
//! - [`reveal`]: Enter and leave reveal mode
//! - [`restore`]: Un-hide everything
//! - [`list`]: What the board currently shows
//! - [`moving`]: Move mode gate
//! - [`config`]: Manage configuration

use crate::config::CardzConfig;
use crate::error::{CardzError, Result};
use crate::model::Card;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod hide;
pub mod keep;
pub mod list;
pub mod moving;
pub mod reorder;
pub mod restore;
pub mod reveal;
pub mod update;

#[derive(Debug, Clone)]
pub struct CardzPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Cards changed by the command, as they are after it ran.
    pub affected_cards: Vec<Card>,
    /// Cards to draw, in order.
    pub listed_cards: Vec<Card>,
    pub reveal_mode: bool,
    pub move_enabled: bool,
    /// Set when the in-memory state could not be written out.
    pub unsaved: bool,
    pub config: Option<CardzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Card>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<Card>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_config(mut self, config: CardzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Record a storage failure once per result.
    fn mark_unsaved(&mut self, error: &CardzError) {
        if !self.unsaved {
            self.unsaved = true;
            self.add_message(CmdMessage::warning(format!(
                "Changes are not saved: {}",
                error
            )));
        }
    }
}

/// Pass through a core call, downgrading a storage failure to a warning on
/// `result`. Returns None in that case.
pub(crate) fn tolerate_unsaved<T>(outcome: Result<T>, result: &mut CmdResult) -> Result<Option<T>> {
    match outcome {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_unsaved() => {
            result.mark_unsaved(&e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Short label used in messages.
pub(crate) fn label(card: &Card) -> String {
    if card.title.is_empty() {
        format!("#{}", card.id)
    } else {
        format!("#{} {}", card.id, card.title)
    }
}
