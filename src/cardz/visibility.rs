//! # Visibility
//!
//! Hiding is a per-card state machine coordinated by one global flag,
//! reveal mode.
//!
//! ```text
//!            hide                    set_keep(true)
//!   Shown ─────────► HiddenDiscard ◄───────────────► HiddenKeep
//!     ▲                              set_keep(false)      │
//!     └──────────── hide / exit_reveal_mode ──────────────┘
//! ```
//!
//! Keep is a one-time reprieve: it is set while looking at hidden cards in
//! reveal mode and spent when reveal mode is closed, which un-hides the card.
//! Leaving reveal mode without setting keep leaves the card hidden.

use crate::error::Result;
use crate::model::{Card, CardId, CardState};
use crate::store::{CardStore, StorageBackend};

#[derive(Debug, Default)]
pub struct VisibilityController {
    reveal_mode: bool,
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal_mode(&self) -> bool {
        self.reveal_mode
    }

    /// The hide button. Returns the card after the transition, or None if
    /// the id is unknown.
    pub fn hide<B: StorageBackend>(
        &self,
        store: &mut CardStore<B>,
        id: CardId,
    ) -> Result<Option<Card>> {
        Ok(store
            .transition(id, CardState::toggled_hidden)?
            .map(|(_, card)| card))
    }

    /// Set or clear keep on a hidden card. Shown cards and unknown ids are
    /// left alone.
    pub fn set_keep<B: StorageBackend>(
        &self,
        store: &mut CardStore<B>,
        id: CardId,
        keep: bool,
    ) -> Result<Option<Card>> {
        Ok(store
            .transition(id, |state| state.with_keep(keep))?
            .map(|(_, card)| card))
    }

    pub fn enter_reveal_mode(&mut self) {
        self.reveal_mode = true;
    }

    /// Close reveal mode: kept cards come back, everything else hidden stays
    /// hidden. Returns the cards that were restored and the save outcome.
    pub fn exit_reveal_mode<B: StorageBackend>(
        &mut self,
        store: &mut CardStore<B>,
    ) -> (Vec<Card>, Result<()>) {
        self.reveal_mode = false;
        store.transition_all(CardState::after_reveal)
    }

    /// Un-hide every card at once, keep or not.
    pub fn restore_all<B: StorageBackend>(
        &self,
        store: &mut CardStore<B>,
    ) -> (Vec<Card>, Result<()>) {
        store.transition_all(|_| CardState::Shown)
    }

    /// What the board should draw right now.
    pub fn rendered<B: StorageBackend>(&self, store: &CardStore<B>) -> Vec<Card> {
        if self.reveal_mode {
            store.all()
        } else {
            store.visible_in_order().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::persistence::{Persistence, DEFAULT_KEY};

    fn store() -> CardStore<MemBackend> {
        let mut store = CardStore::new(Persistence::new(MemBackend::new()));
        for title in ["one", "two", "three"] {
            store.create(title.into(), "".into(), 1).unwrap();
        }
        store
    }

    fn id_of(store: &CardStore<MemBackend>, title: &str) -> CardId {
        store
            .all()
            .into_iter()
            .find(|c| c.title == title)
            .map(|c| c.id)
            .unwrap()
    }

    fn assert_keep_implies_hidden(store: &CardStore<MemBackend>) {
        for card in store.all() {
            assert!(!card.keep || card.hidden, "card {} kept but shown", card.id);
        }
    }

    #[test]
    fn hide_moves_card_out_of_visible_list() {
        let mut store = store();
        let vis = VisibilityController::new();
        let id = id_of(&store, "two");

        vis.hide(&mut store, id).unwrap();

        assert!(store.visible_in_order().all(|c| c.id != id));
        let hidden = store.find(id).unwrap();
        assert!(hidden.is_hidden());
        assert!(!hidden.is_kept());
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn hide_twice_stays_hidden() {
        let mut store = store();
        let vis = VisibilityController::new();
        let id = id_of(&store, "one");

        vis.hide(&mut store, id).unwrap();
        let card = vis.hide(&mut store, id).unwrap().unwrap();

        assert_eq!(card.state(), CardState::HiddenDiscard);
    }

    #[test]
    fn hide_on_kept_card_restores_it() {
        let mut store = store();
        let vis = VisibilityController::new();
        let id = id_of(&store, "one");

        vis.hide(&mut store, id).unwrap();
        vis.set_keep(&mut store, id, true).unwrap();
        let card = vis.hide(&mut store, id).unwrap().unwrap();

        assert_eq!(card.state(), CardState::Shown);
        assert!(!card.keep);
        assert_keep_implies_hidden(&store);
    }

    #[test]
    fn hide_unknown_id_is_noop() {
        let mut store = store();
        let vis = VisibilityController::new();
        assert!(vis.hide(&mut store, 12345).unwrap().is_none());
        assert_eq!(store.visible_in_order().count(), 3);
    }

    #[test]
    fn keep_on_shown_card_is_noop() {
        let mut store = store();
        let vis = VisibilityController::new();
        let id = id_of(&store, "one");
        let writes = store.persistence().backend().write_count();

        let card = vis.set_keep(&mut store, id, true).unwrap().unwrap();

        assert_eq!(card.state(), CardState::Shown);
        assert_eq!(store.persistence().backend().write_count(), writes);
        assert_keep_implies_hidden(&store);
    }

    #[test]
    fn reveal_mode_renders_everything() {
        let mut store = store();
        let mut vis = VisibilityController::new();
        let two = id_of(&store, "two");
        vis.hide(&mut store, two).unwrap();

        assert_eq!(vis.rendered(&store).len(), 2);
        vis.enter_reveal_mode();
        assert!(vis.reveal_mode());
        let rendered = vis.rendered(&store);
        assert_eq!(rendered.len(), 3);
        assert!(rendered[1].is_hidden());
    }

    #[test]
    fn entering_reveal_mode_changes_no_card() {
        let mut store = store();
        let mut vis = VisibilityController::new();
        let two = id_of(&store, "two");
        vis.hide(&mut store, two).unwrap();
        let before = store.all();

        vis.enter_reveal_mode();

        assert_eq!(store.all(), before);
    }

    #[test]
    fn exit_reveal_restores_only_kept_cards() {
        let mut store = store();
        let mut vis = VisibilityController::new();
        let kept = id_of(&store, "one");
        let discarded = id_of(&store, "three");
        vis.hide(&mut store, kept).unwrap();
        vis.hide(&mut store, discarded).unwrap();

        vis.enter_reveal_mode();
        vis.set_keep(&mut store, kept, true).unwrap();
        let (restored, saved) = vis.exit_reveal_mode(&mut store);
        saved.unwrap();

        assert!(!vis.reveal_mode());
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].id, kept);

        let kept_card = store.find(kept).unwrap();
        assert!(!kept_card.is_hidden());
        assert!(!kept_card.keep);
        assert!(store.visible_in_order().any(|c| c.id == kept));

        let discarded_card = store.find(discarded).unwrap();
        assert!(discarded_card.is_hidden());
        assert!(!discarded_card.keep);
    }

    #[test]
    fn unset_keep_before_exit_recommits_hide() {
        let mut store = store();
        let mut vis = VisibilityController::new();
        let id = id_of(&store, "two");
        vis.hide(&mut store, id).unwrap();

        vis.enter_reveal_mode();
        vis.set_keep(&mut store, id, true).unwrap();
        vis.set_keep(&mut store, id, false).unwrap();
        vis.exit_reveal_mode(&mut store).1.unwrap();

        assert!(store.find(id).unwrap().is_hidden());
    }

    #[test]
    fn exit_reveal_twice_is_same_as_once() {
        let mut store = store();
        let mut vis = VisibilityController::new();
        let a = id_of(&store, "one");
        let b = id_of(&store, "two");
        vis.hide(&mut store, a).unwrap();
        vis.hide(&mut store, b).unwrap();
        vis.enter_reveal_mode();
        vis.set_keep(&mut store, a, true).unwrap();

        vis.exit_reveal_mode(&mut store).1.unwrap();
        let once = store.all();
        let blob_once = store.persistence().backend().read(DEFAULT_KEY).unwrap();

        let (restored, saved) = vis.exit_reveal_mode(&mut store);
        saved.unwrap();

        assert!(restored.is_empty());
        assert_eq!(store.all(), once);
        assert_eq!(
            store.persistence().backend().read(DEFAULT_KEY).unwrap(),
            blob_once
        );
    }

    #[test]
    fn exit_reveal_writes_once() {
        let mut store = store();
        let mut vis = VisibilityController::new();
        for title in ["one", "two", "three"] {
            let id = id_of(&store, title);
            vis.hide(&mut store, id).unwrap();
            vis.set_keep(&mut store, id, true).unwrap();
        }
        let writes = store.persistence().backend().write_count();

        vis.exit_reveal_mode(&mut store).1.unwrap();

        assert_eq!(store.persistence().backend().write_count(), writes + 1);
        assert_eq!(store.visible_in_order().count(), 3);
    }

    #[test]
    fn restore_all_unhides_everything() {
        let mut store = store();
        let vis = VisibilityController::new();
        let a = id_of(&store, "one");
        let b = id_of(&store, "two");
        vis.hide(&mut store, a).unwrap();
        vis.hide(&mut store, b).unwrap();
        vis.set_keep(&mut store, b, true).unwrap();

        let (restored, saved) = vis.restore_all(&mut store);
        saved.unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(store.visible_in_order().count(), 3);
        assert_keep_implies_hidden(&store);
    }
}
