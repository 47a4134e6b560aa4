use super::backend::StorageBackend;
use super::persistence::Persistence;
use crate::error::{CardzError, Result};
use crate::model::{Card, CardId, CardState};
use chrono::Utc;
use std::collections::HashSet;

/// The ordered card collection. Sequence position is display order.
pub struct CardStore<B: StorageBackend> {
    cards: Vec<Card>,
    persistence: Persistence<B>,
}

impl<B: StorageBackend> CardStore<B> {
    /// An empty store. Call [`CardStore::load`] to read the persisted blob.
    pub fn new(persistence: Persistence<B>) -> Self {
        Self {
            cards: Vec::new(),
            persistence,
        }
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }

    /// Replace the in-memory sequence with the persisted one.
    ///
    /// Never fails: a blob that cannot be read or parsed leaves the store empty.
    pub fn load(&mut self) {
        self.cards = match self.persistence.load() {
            Ok(cards) => normalize(cards),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable card data");
                Vec::new()
            }
        };
        tracing::debug!(count = self.cards.len(), "loaded cards");
    }

    pub fn create(&mut self, title: String, description: String, size: u32) -> Result<Card> {
        let card = Card::new(self.next_id(), title, description, size);
        self.cards.push(card.clone());
        tracing::debug!(id = card.id, "created card");
        self.persist()?;
        Ok(card)
    }

    /// Replace title, description and size in place. An unknown id is
    /// created with that id at the end of the sequence.
    pub fn update(
        &mut self,
        id: CardId,
        title: String,
        description: String,
        size: u32,
    ) -> Result<Card> {
        let card = match self.position(id) {
            Some(pos) => {
                let card = &mut self.cards[pos];
                card.title = title;
                card.description = description;
                card.size = size;
                card.clone()
            }
            None => {
                let card = Card::new(id, title, description, size);
                self.cards.push(card.clone());
                card
            }
        };
        tracing::debug!(id, "updated card");
        self.persist()?;
        Ok(card)
    }

    /// Remove a card. Unknown ids are a no-op and nothing is written.
    pub fn delete(&mut self, id: CardId) -> Result<Option<Card>> {
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };
        let removed = self.cards.remove(pos);
        tracing::debug!(id, "deleted card");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Reorder the sequence to match `order`, which must name every card
    /// exactly once.
    pub fn reorder(&mut self, order: &[CardId]) -> Result<()> {
        if order.len() != self.cards.len() {
            return Err(CardzError::OrderingMismatch(format!(
                "expected {} ids, got {}",
                self.cards.len(),
                order.len()
            )));
        }

        let mut seen = HashSet::with_capacity(order.len());
        let mut reordered = Vec::with_capacity(order.len());
        for &id in order {
            if !seen.insert(id) {
                return Err(CardzError::OrderingMismatch(format!("id {} repeated", id)));
            }
            let card = self
                .find_ref(id)
                .ok_or_else(|| CardzError::OrderingMismatch(format!("unknown id {}", id)))?;
            reordered.push(card.clone());
        }

        self.cards = reordered;
        tracing::debug!(?order, "reordered cards");
        self.persist()
    }

    /// Shown cards in order. Recomputed on every call.
    pub fn visible_in_order(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().filter(|c| !c.is_hidden()).cloned()
    }

    /// Every card in order, hidden ones included.
    pub fn all(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn find(&self, id: CardId) -> Option<Card> {
        self.find_ref(id).cloned()
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Move one card into `next` state. Returns the previous state and the
    /// resulting card, or None for an unknown id. Writes only on change.
    pub(crate) fn transition(
        &mut self,
        id: CardId,
        next: impl FnOnce(CardState) -> CardState,
    ) -> Result<Option<(CardState, Card)>> {
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };
        let card = &mut self.cards[pos];
        let before = card.state();
        let after = next(before);
        card.set_state(after);
        let card = card.clone();

        if before != after {
            tracing::debug!(id, from = %before, to = %after, "card visibility changed");
            self.persist()?;
        }
        Ok(Some((before, card)))
    }

    /// Apply `next` to every card, then write once. Returns the cards whose
    /// state changed along with the outcome of the write. The change stands in
    /// memory even when the write fails.
    pub(crate) fn transition_all(
        &mut self,
        next: impl Fn(CardState) -> CardState,
    ) -> (Vec<Card>, Result<()>) {
        let mut changed = Vec::new();
        for card in &mut self.cards {
            let before = card.state();
            card.set_state(next(before));
            if card.state() != before {
                changed.push(card.clone());
            }
        }
        (changed, self.persist())
    }

    fn persist(&self) -> Result<()> {
        self.persistence.save(&self.cards)
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    fn find_ref(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Current time in milliseconds, bumped past any id already taken.
    fn next_id(&self) -> CardId {
        let mut id = Utc::now().timestamp_millis();
        while self.position(id).is_some() {
            id += 1;
        }
        id
    }
}

/// Enforce the collection invariants on data read from storage.
fn normalize(cards: Vec<Card>) -> Vec<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards
        .into_iter()
        .filter_map(|mut card| {
            if !seen.insert(card.id) {
                tracing::warn!(id = card.id, "dropping duplicate card id");
                return None;
            }
            card.normalize();
            Some(card)
        })
        .collect()
}
