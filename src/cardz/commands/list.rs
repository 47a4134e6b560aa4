use crate::commands::CmdResult;
use crate::error::Result;
use crate::move_mode::MoveMode;
use crate::store::{CardStore, StorageBackend};
use crate::visibility::VisibilityController;

/// The board as it should be drawn right now.
pub fn run<B: StorageBackend>(
    store: &CardStore<B>,
    visibility: &VisibilityController,
    move_mode: &MoveMode,
) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_cards(visibility.rendered(store));
    result.reveal_mode = visibility.reveal_mode();
    result.move_enabled = move_mode.is_enabled();
    Ok(result)
}
