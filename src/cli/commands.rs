//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newsboard")]
#[command(about = "Terminal news list editor", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new board
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List entries, newest first
    #[command(alias = "ls")]
    List,

    /// Show a single entry
    Show {
        /// Entry id
        id: i64,
    },

    /// Add a new entry
    Add {
        /// Entry title
        title: String,

        /// Entry text
        text: String,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id
        id: i64,

        /// New title (keeps the current one if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New text (keeps the current one if omitted)
        #[arg(short = 'x', long)]
        text: Option<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry id
        id: i64,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
