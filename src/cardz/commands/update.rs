use crate::commands::{label, tolerate_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};

/// Submit the edit form for `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardUpdate {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub size: u32,
}

impl CardUpdate {
    pub fn new(id: CardId, title: String, description: String, size: u32) -> Self {
        Self {
            id,
            title,
            description,
            size,
        }
    }
}

pub fn run<B: StorageBackend>(store: &mut CardStore<B>, update: CardUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let existed = store.find(update.id).is_some();
    let id = update.id;

    let outcome = store.update(id, update.title, update.description, update.size);
    tolerate_unsaved(outcome, &mut result)?;

    if let Some(card) = store.find(id) {
        let verb = if existed { "updated" } else { "created" };
        result.add_message(CmdMessage::success(format!("Card {}: {}", verb, label(&card))));
        result.affected_cards.push(card);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::store_with_titles;

    #[test]
    fn updates_in_place() {
        let (mut store, ids) = store_with_titles(&["a", "b", "c"]);
        let update = CardUpdate::new(ids[1], "B".into(), "bee".into(), 3);

        let result = run(&mut store, update).unwrap();

        assert_eq!(store.ids(), ids);
        let card = &result.affected_cards[0];
        assert_eq!(card.title, "B");
        assert_eq!(card.description, "bee");
        assert_eq!(card.size, 3);
        assert!(result.messages[0].content.contains("updated"));
    }

    #[test]
    fn unknown_id_creates_card_with_that_id() {
        let (mut store, _) = store_with_titles(&["a"]);

        let result = run(&mut store, CardUpdate::new(77, "new".into(), "".into(), 1)).unwrap();

        assert_eq!(result.affected_cards[0].id, 77);
        assert!(result.messages[0].content.contains("created"));
        assert_eq!(store.len(), 2);
    }
}
