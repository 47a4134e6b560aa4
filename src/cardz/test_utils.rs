use crate::model::CardId;
use crate::store::mem_backend::MemBackend;
use crate::store::{CardStore, Persistence};

pub fn mem_store() -> CardStore<MemBackend> {
    CardStore::new(Persistence::new(MemBackend::new()))
}

/// A store holding one shown card per title, in order.
pub fn store_with_titles(titles: &[&str]) -> (CardStore<MemBackend>, Vec<CardId>) {
    let mut store = mem_store();
    let ids = titles
        .iter()
        .map(|title| {
            store
                .create(title.to_string(), String::new(), 1)
                .expect("create in memory")
                .id
        })
        .collect();
    (store, ids)
}
