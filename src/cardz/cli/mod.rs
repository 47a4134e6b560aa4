//! # CLI Behavior
//!
//! This is **one possible client** for cardz, not the application itself.
//! Each invocation is one session: reveal mode and move mode start off.
//!
//! - `cardz` with no arguments lists the visible cards.
//! - `cardz reveal` shows hidden cards too; `cardz keep <id>` marks one to come
//!   back; `cardz reveal --close` brings kept cards back. Keep flags are
//!   stored, so these can run as separate invocations.
//! - `cardz order <ids...>` turns move mode on, commits the order and turns it
//!   off again, the same as pressing "Move Cards" then "Save Order".
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
