use crate::commands::{tolerate_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::move_mode::MoveMode;
use crate::store::{CardStore, StorageBackend};

/// Commit a new display order. `order` must list every card exactly once.
pub fn run<B: StorageBackend>(
    store: &mut CardStore<B>,
    move_mode: &MoveMode,
    order: &[CardId],
) -> Result<CmdResult> {
    if !move_mode.is_enabled() {
        tracing::warn!("reorder requested while move mode is off");
    }

    let mut result = CmdResult::default();
    if tolerate_unsaved(store.reorder(order), &mut result)?.is_some() {
        result.add_message(CmdMessage::success("Order saved"));
    }
    result.move_enabled = move_mode.is_enabled();
    Ok(result.with_listed_cards(store.visible_in_order().collect()))
}
