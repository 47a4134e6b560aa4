use crate::commands::{tolerate_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CardStore, StorageBackend};
use crate::visibility::VisibilityController;

/// Un-hide every hidden card, keep flag or not.
pub fn run<B: StorageBackend>(
    store: &mut CardStore<B>,
    visibility: &VisibilityController,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let (restored, saved) = visibility.restore_all(store);
    tolerate_unsaved(saved, &mut result)?;

    let message = match restored.len() {
        0 => CmdMessage::info("No hidden cards"),
        1 => CmdMessage::success("1 card restored"),
        n => CmdMessage::success(format!("{} cards restored", n)),
    };
    result.add_message(message);
    result.reveal_mode = visibility.reveal_mode();
    Ok(result
        .with_affected_cards(restored)
        .with_listed_cards(visibility.rendered(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::test_utils::store_with_titles;

    #[test]
    fn restores_all_hidden() {
        let (mut store, ids) = store_with_titles(&["a", "b", "c"]);
        let vis = VisibilityController::new();
        vis.hide(&mut store, ids[0]).unwrap();
        vis.hide(&mut store, ids[2]).unwrap();

        let result = run(&mut store, &vis).unwrap();

        assert_eq!(result.affected_cards.len(), 2);
        assert_eq!(result.listed_cards.len(), 3);
        assert_eq!(result.messages[0].content, "2 cards restored");
    }

    #[test]
    fn nothing_hidden_is_info() {
        let (mut store, _) = store_with_titles(&["a"]);
        let vis = VisibilityController::new();
        let result = run(&mut store, &vis).unwrap();
        assert!(result.affected_cards.is_empty());
        assert_eq!(result.messages[0].content, "No hidden cards");
    }

    #[test]
    fn failed_save_still_reports_restored_cards() {
        let (mut store, ids) = store_with_titles(&["a", "b", "c"]);
        let vis = VisibilityController::new();
        vis.hide(&mut store, ids[0]).unwrap();
        vis.hide(&mut store, ids[1]).unwrap();
        store.persistence().backend().set_simulate_write_error(true);

        let result = run(&mut store, &vis).unwrap();

        assert!(result.unsaved);
        assert_eq!(result.affected_cards.len(), 2);
        assert_eq!(store.visible_in_order().count(), 3);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[1].content, "2 cards restored");
    }
}
