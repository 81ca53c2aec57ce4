use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Simple Address Book")]
pub struct Cli {
    /// Where the contacts file lives
    #[arg(long, env = "CONTACTS_PATH")]
    pub contacts_path: Option<String>,

    /// Cap for the simulated network delay, in milliseconds (0 disables)
    #[arg(long, env = "FAKE_LATENCY_MS")]
    pub latency_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts, optionally narrowed by a name query
    List {
        /// Match against first and last name
        query: Option<String>,
    },
    /// Create a contact, optionally filling fields right away
    Add {
        /// First name
        #[arg(long)]
        first: Option<String>,

        /// Last name
        #[arg(long)]
        last: Option<String>,

        /// Avatar URL
        #[arg(long)]
        avatar: Option<String>,

        /// Twitter handle
        #[arg(long)]
        twitter: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show a single contact
    Show {
        /// Contact id
        id: Uuid,
    },
    /// Edit fields of an existing contact
    Edit {
        /// Contact id
        id: Uuid,

        /// Update first name
        #[arg(long)]
        first: Option<String>,

        /// Update last name
        #[arg(long)]
        last: Option<String>,

        /// Update avatar URL
        #[arg(long)]
        avatar: Option<String>,

        /// Update twitter handle
        #[arg(long)]
        twitter: Option<String>,

        /// Update notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Mark a contact as a favorite
    Favorite {
        /// Contact id
        id: Uuid,

        /// Remove from favorites instead
        #[arg(long)]
        remove: bool,
    },
    /// Delete a contact by id
    Delete {
        /// Contact id
        id: Uuid,
    },
    /// Import contacts from a .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: String,
    },
    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for the export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
