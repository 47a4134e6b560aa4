use crate::commands::{label, tolerate_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CardStore, StorageBackend};
use crate::visibility::VisibilityController;

/// Show hidden cards alongside the rest so they can be kept.
pub fn enter<B: StorageBackend>(
    store: &CardStore<B>,
    visibility: &mut VisibilityController,
) -> Result<CmdResult> {
    visibility.enter_reveal_mode();

    let mut result = CmdResult::default().with_listed_cards(visibility.rendered(store));
    let hidden = result.listed_cards.iter().filter(|c| c.is_hidden()).count();
    if hidden == 0 {
        result.add_message(CmdMessage::info("No hidden cards"));
    }
    result.reveal_mode = true;
    Ok(result)
}

/// Close reveal mode, bringing back kept cards.
pub fn exit<B: StorageBackend>(
    store: &mut CardStore<B>,
    visibility: &mut VisibilityController,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let (restored, saved) = visibility.exit_reveal_mode(store);
    tolerate_unsaved(saved, &mut result)?;

    for card in &restored {
        result.add_message(CmdMessage::success(format!("Card restored: {}", label(card))));
    }
    result.affected_cards = restored;
    result.listed_cards = visibility.rendered(store);
    result.reveal_mode = visibility.reveal_mode();
    Ok(result)
}
