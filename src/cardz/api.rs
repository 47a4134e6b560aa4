//! # API Facade
//!
//! [`CardzApi`] is the application context. It owns the one card store, the
//! visibility controller and the move mode gate, and every user action goes
//! through exactly one of its methods. Clients re-render from the returned
//! [`CmdResult`] (or by calling [`CardzApi::list_cards`]) after each call.
//!
//! The facade only dispatches. Logic lives in `commands/*.rs` and in the core
//! modules they call.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `CardzApi<FsBackend>`
//! - Testing: `CardzApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{Card, CardId};
use crate::move_mode::MoveMode;
use crate::store::{CardStore, Persistence, StorageBackend};
use crate::visibility::VisibilityController;

pub struct CardzApi<B: StorageBackend> {
    store: CardStore<B>,
    visibility: VisibilityController,
    move_mode: MoveMode,
    paths: commands::CardzPaths,
}

impl<B: StorageBackend> CardzApi<B> {
    /// Build the context and load the persisted cards.
    pub fn open(persistence: Persistence<B>, paths: commands::CardzPaths) -> Self {
        let mut store = CardStore::new(persistence);
        store.load();
        Self {
            store,
            visibility: VisibilityController::new(),
            move_mode: MoveMode::new(),
            paths,
        }
    }

    pub fn list_cards(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.visibility, &self.move_mode)
    }

    pub fn find_card(&self, id: CardId) -> Option<Card> {
        self.store.find(id)
    }

    pub fn create_card(
        &mut self,
        title: String,
        description: String,
        size: u32,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, description, size)
    }

    pub fn update_card(&mut self, update: CardUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, update)
    }

    pub fn delete_cards(&mut self, ids: &[CardId]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn reorder_cards(&mut self, order: &[CardId]) -> Result<commands::CmdResult> {
        commands::reorder::run(&mut self.store, &self.move_mode, order)
    }

    pub fn hide_cards(&mut self, ids: &[CardId]) -> Result<commands::CmdResult> {
        commands::hide::run(&mut self.store, &self.visibility, ids)
    }

    pub fn keep_cards(&mut self, ids: &[CardId], keep: bool) -> Result<commands::CmdResult> {
        commands::keep::run(&mut self.store, &self.visibility, ids, keep)
    }

    pub fn enter_reveal_mode(&mut self) -> Result<commands::CmdResult> {
        commands::reveal::enter(&self.store, &mut self.visibility)
    }

    pub fn exit_reveal_mode(&mut self) -> Result<commands::CmdResult> {
        commands::reveal::exit(&mut self.store, &mut self.visibility)
    }

    pub fn restore_all(&mut self) -> Result<commands::CmdResult> {
        commands::restore::run(&mut self.store, &self.visibility)
    }

    pub fn set_move_mode(&mut self, enabled: bool) -> Result<commands::CmdResult> {
        commands::moving::set(&mut self.move_mode, enabled)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn reveal_mode(&self) -> bool {
        self.visibility.reveal_mode()
    }

    pub fn move_enabled(&self) -> bool {
        self.move_mode.is_enabled()
    }

    pub fn paths(&self) -> &commands::CardzPaths {
        &self.paths
    }

    pub fn store(&self) -> &CardStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::update::CardUpdate;
pub use commands::{CardzPaths, CmdMessage, CmdResult, MessageLevel};
