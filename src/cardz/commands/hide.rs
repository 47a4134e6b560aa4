use crate::commands::{label, tolerate_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CardId, CardState};
use crate::store::{CardStore, StorageBackend};
use crate::visibility::VisibilityController;

/// Press the hide button on each card.
pub fn run<B: StorageBackend>(
    store: &mut CardStore<B>,
    visibility: &VisibilityController,
    ids: &[CardId],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let Some(before) = store.find(id) else {
            result.add_message(CmdMessage::info(format!("No card with id {}", id)));
            continue;
        };
        tolerate_unsaved(visibility.hide(store, id), &mut result)?;
        let Some(card) = store.find(id) else {
            continue;
        };

        let message = match (before.state(), card.state()) {
            (CardState::Shown, _) => CmdMessage::success(format!("Card hidden: {}", label(&card))),
            (CardState::HiddenKeep, CardState::Shown) => {
                CmdMessage::success(format!("Card restored: {}", label(&card)))
            }
            _ => CmdMessage::info(format!("Card already hidden: {}", label(&card))),
        };
        result.add_message(message);
        result.affected_cards.push(card);
    }

    result.reveal_mode = visibility.reveal_mode();
    Ok(result)
}
