use crate::config::{DEFAULT_DATA_DIR, DEFAULT_STORAGE_CHOICE};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice: json (kept under --data-dir) or mem (lost when the command exits)
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from(DEFAULT_STORAGE_CHOICE))]
    pub storage_choice: String,

    /// Directory the contact list is kept in
    #[arg(long, env = "ROLODEX_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// List contacts
    List {
        /// Only show favorites
        #[arg(long)]
        favorites: bool,

        /// Sort ordering (default is insertion order)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Reverse order
        #[arg(short, long)]
        reverse: bool,
    },
    /// Show every detail of one contact, with call/sms/mail links
    Show {
        #[arg(long)]
        id: Uuid,
    },
    /// Edit the data of an existing contact
    /// Provide the contact id followed by as many fields as you wish to update
    Edit {
        #[arg(long)]
        id: Uuid,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a contact
    Delete {
        #[arg(long)]
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Mark or unmark a contact as favorite
    Favorite {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    FirstName,
    LastName,
}
