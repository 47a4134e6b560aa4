use crate::commands::{label, tolerate_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut CardStore<B>, ids: &[CardId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let Some(card) = store.find(id) else {
            result.add_message(CmdMessage::info(format!("No card with id {}", id)));
            continue;
        };
        if tolerate_unsaved(store.delete(id), &mut result)?.is_some() {
            result.add_message(CmdMessage::success(format!("Card deleted: {}", label(&card))));
        }
        result.affected_cards.push(card);
    }

    Ok(result)
}
