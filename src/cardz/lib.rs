//! # Cardz Architecture
//!
//! Cardz is a **UI-agnostic card board library**: an ordered collection of
//! small cards that can be edited, reordered, hidden and kept, persisted as one
//! blob in a local key-value store. The `cardz` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, handles terminal I/O    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and both mode controllers                 │
//! │  - One method per user action                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Calls the core, returns structured CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, visibility.rs, move_mode.rs, model.rs)       │
//! │  - Card store, hide/keep/reveal state machine, move gate    │
//! │  - Persistence adapter over a StorageBackend                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process, and never reads back what a client rendered. The store is the
//! only source of truth; clients get copies.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user action
//! - [`store`]: Card store, persistence adapter, storage backends
//! - [`visibility`]: Hide / keep / reveal state machine
//! - [`move_mode`]: Reorder gate
//! - [`model`]: `Card` and `CardState`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod move_mode;
pub mod store;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_utils;
