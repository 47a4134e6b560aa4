//! # Storage Layer
//!
//! Cards live in memory in a [`CardStore`](card_store::CardStore) and are written
//! out, whole, after every change.
//!
//! ## Layers
//!
//! ```text
//! CardStore        ordered Vec<Card>, create/update/delete/reorder
//!     │
//! Persistence      Vec<Card> <-> one JSON blob under one key
//!     │
//! StorageBackend   read/write/remove raw strings by key
//! ```
//!
//! The store is the single source of truth. Nothing is ever read back from
//! rendered output, and there are no partial writes: the blob is the full
//! sequence in display order.
//!
//! ## Failure Modes
//!
//! - **Corrupt data**: a blob that does not parse loads as an empty collection.
//! - **Storage unavailable**: a failed write leaves the in-memory state intact
//!   and returns [`CardzError::StorageUnavailable`](crate::error::CardzError).
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! $CARDZ_HOME/
//! ├── cards.json    # The card sequence
//! └── config.json   # Configuration
//! ```

pub mod backend;
pub mod card_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod persistence;

pub use backend::StorageBackend;
pub use card_store::CardStore;
pub use persistence::Persistence;
