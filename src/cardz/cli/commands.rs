//! # CLI Layer
//!
//! This module is **one possible client** for cardz. It is the only place that
//! parses arguments, installs the log subscriber, writes to stdout, and picks
//! exit codes.
//!
//! Each invocation opens the board, performs one user action through
//! [`CardzApi`], and prints the resulting card list and messages. Reveal mode
//! and move mode live in memory only, so they last for one invocation; keep
//! marks are persisted, which is why `keep` followed by `reveal --close` works
//! across two runs.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_tracing()`: stderr subscriber, filtered by `RUST_LOG`
//! - `init_context()`: Resolves the data dir, loads config, opens the API
//! - `handle_*()`: Per-command handlers that call the API and print

use super::render::{print_cards, print_config, print_messages};
use super::setup::{Cli, Commands};
use cardz::api::{CardUpdate, CardzApi, CardzPaths, CmdResult, ConfigAction};
use cardz::config::CardzConfig;
use cardz::error::{CardzError, Result};
use cardz::model::CardId;
use cardz::store::fs_backend::FsBackend;
use cardz::store::Persistence;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HOME_ENV: &str = "CARDZ_HOME";

struct AppContext {
    api: CardzApi<FsBackend>,
    config: CardzConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        None => handle_list(&mut ctx, false),
        Some(Commands::List { all }) => handle_list(&mut ctx, all),
        Some(Commands::Add {
            title,
            description,
            size,
        }) => handle_add(&mut ctx, title.join(" "), description, size),
        Some(Commands::Edit {
            id,
            title,
            description,
            size,
        }) => handle_edit(&mut ctx, id, title, description, size),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Hide { ids }) => handle_hide(&mut ctx, &ids),
        Some(Commands::Keep { ids, off }) => handle_keep(&mut ctx, &ids, !off),
        Some(Commands::Reveal { close }) => handle_reveal(&mut ctx, close),
        Some(Commands::Restore) => handle_restore(&mut ctx),
        Some(Commands::Order { ids }) => handle_order(&mut ctx, &ids),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

/// Log to stderr so stdout only carries rendered output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "cardz=debug" } else { "cardz=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "cardz", "cardz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CardzError::Store(format!(
                "No data directory found; set {} to choose one",
                HOME_ENV
            ))
        })
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = CardzConfig::load(&data_dir)?;
    tracing::debug!(dir = %data_dir.display(), key = %config.storage_key, "opening board");

    let persistence =
        Persistence::with_key(FsBackend::new(data_dir.clone()), config.storage_key.clone());
    let api = CardzApi::open(persistence, CardzPaths { data_dir });

    Ok(AppContext { api, config })
}

fn print_result(result: &CmdResult) {
    print_cards(&result.listed_cards, result.reveal_mode);
    print_messages(&result.messages);
}

fn handle_list(ctx: &mut AppContext, all: bool) -> Result<()> {
    let result = if all {
        ctx.api.enter_reveal_mode()?
    } else {
        ctx.api.list_cards()?
    };
    print_result(&result);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    description: String,
    size: Option<u32>,
) -> Result<()> {
    let size = size.unwrap_or(ctx.config.default_size);
    let result = ctx.api.create_card(title, description, size)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: CardId,
    title: Option<String>,
    description: Option<String>,
    size: Option<u32>,
) -> Result<()> {
    let update = match ctx.api.find_card(id) {
        Some(card) => CardUpdate::new(
            id,
            title.unwrap_or(card.title),
            description.unwrap_or(card.description),
            size.unwrap_or(card.size),
        ),
        None => {
            let title = title.ok_or(CardzError::CardNotFound(id))?;
            CardUpdate::new(
                id,
                title,
                description.unwrap_or_default(),
                size.unwrap_or(ctx.config.default_size),
            )
        }
    };

    let result = ctx.api.update_card(update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[CardId]) -> Result<()> {
    let result = ctx.api.delete_cards(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_hide(ctx: &mut AppContext, ids: &[CardId]) -> Result<()> {
    let result = ctx.api.hide_cards(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_keep(ctx: &mut AppContext, ids: &[CardId], keep: bool) -> Result<()> {
    let result = ctx.api.keep_cards(ids, keep)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reveal(ctx: &mut AppContext, close: bool) -> Result<()> {
    let result = if close {
        ctx.api.enter_reveal_mode()?;
        ctx.api.exit_reveal_mode()?
    } else {
        ctx.api.enter_reveal_mode()?
    };
    print_result(&result);
    Ok(())
}

fn handle_restore(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.restore_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_order(ctx: &mut AppContext, ids: &[CardId]) -> Result<()> {
    ctx.api.set_move_mode(true)?;
    let outcome = ctx.api.reorder_cards(ids);
    ctx.api.set_move_mode(false)?;

    let result = outcome?;
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
