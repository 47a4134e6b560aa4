use crate::commands::{label, tolerate_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CardStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut CardStore<B>,
    title: String,
    description: String,
    size: u32,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let outcome = store.create(title, description, size);
    let card = match tolerate_unsaved(outcome, &mut result)? {
        Some(card) => card,
        // Still in memory, appended last.
        None => match store.all().pop() {
            Some(card) => card,
            None => return Ok(result),
        },
    };

    result.add_message(CmdMessage::success(format!("Card created: {}", label(&card))));
    result.affected_cards.push(card);
    Ok(result)
}
