use crate::commands::{label, tolerate_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};
use crate::visibility::VisibilityController;

/// Tick or untick the keep box on hidden cards.
pub fn run<B: StorageBackend>(
    store: &mut CardStore<B>,
    visibility: &VisibilityController,
    ids: &[CardId],
    keep: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        tolerate_unsaved(visibility.set_keep(store, id, keep), &mut result)?;
        let Some(card) = store.find(id) else {
            result.add_message(CmdMessage::info(format!("No card with id {}", id)));
            continue;
        };
        if !card.is_hidden() {
            result.add_message(CmdMessage::info(format!(
                "Card is not hidden: {}",
                label(&card)
            )));
            continue;
        }

        let verb = if keep { "will come back" } else { "stays hidden" };
        result.add_message(CmdMessage::success(format!("{} {}", label(&card), verb)));
        result.affected_cards.push(card);
    }

    result.reveal_mode = visibility.reveal_mode();
    Ok(result)
}
