use cardz::model::CardId;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardz", bin_name = "cardz", version)]
#[command(about = "A local board of small cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cards
    #[command(alias = "ls")]
    List {
        /// Include hidden cards (reveal mode)
        #[arg(long)]
        all: bool,
    },

    /// Add a card
    #[command(alias = "n")]
    Add {
        /// Title words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Card description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Card size (1 small, 2 medium, 3 large)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=3))]
        size: Option<u32>,
    },

    /// Edit a card (unknown ids are created)
    #[command(alias = "e")]
    Edit {
        /// Card id
        id: CardId,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New size (1 small, 2 medium, 3 large)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=3))]
        size: Option<u32>,
    },

    /// Delete one or more cards
    #[command(alias = "rm")]
    Delete {
        /// Card ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<CardId>,
    },

    /// Hide cards (hiding a kept card brings it back)
    Hide {
        /// Card ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<CardId>,
    },

    /// Mark hidden cards to come back when reveal mode closes
    Keep {
        /// Card ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<CardId>,

        /// Clear the mark instead
        #[arg(long)]
        off: bool,
    },

    /// Show hidden cards, or close reveal mode
    Reveal {
        /// Close reveal mode, restoring kept cards
        #[arg(long)]
        close: bool,
    },

    /// Un-hide every card
    Restore,

    /// Save a new card order
    #[command(alias = "mv")]
    Order {
        /// Every card id, in the new order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<CardId>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, default-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
