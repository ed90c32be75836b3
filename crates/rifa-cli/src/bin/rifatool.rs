use std::path::Path;

use clap::{Parser, Subcommand};

use rifa_cli::commands::{
    bulk_ops, collection_ops, config_ops, default_store_path, entry_ops, search_ops,
};
use rifa_core::model::OwnerId;

#[derive(Parser)]
#[command(name = "rifatool", about = "Raffle list management tool")]
struct Cli {
    /// Store file (default: ~/.local/share/rifa/store.rifa)
    #[arg(long, global = true)]
    store: Option<String>,
    /// Owner account the command acts for
    #[arg(long, global = true, default_value = "local")]
    owner: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a collection
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// active, completed, or cancelled
        #[arg(long, default_value = "active")]
        status: String,
    },
    /// List collections
    List,
    /// Show one collection's details
    Show { name: String },
    /// Edit a collection's name, description, or status
    Edit {
        name: String,
        #[arg(long)]
        rename: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a collection and its numbers
    Delete { name: String },
    /// Add a number to a collection
    Add {
        collection: String,
        value: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove a number by id
    Remove { collection: String, entry_id: u64 },
    /// List a collection's numbers
    Numbers { collection: String },
    /// Mark a number as a drawn winner
    MarkWinner { collection: String, entry_id: u64 },
    /// Clear a number's winner flag
    ClearWinner { collection: String, entry_id: u64 },
    /// Search numbers by terminal digits or label text
    Search { collection: String, query: String },
    /// Import collections from a flat CSV file
    Import {
        /// CSV file: one `collection,number` record per line
        file: String,
    },
    /// Export collections to a flat CSV file
    Export {
        /// Export only this collection
        #[arg(long)]
        collection: Option<String>,
        /// Output file (default: date-stamped name)
        #[arg(long)]
        output: Option<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    rifa_cli::trace_init::init_tracing();
    let cli = Cli::parse();

    let path_str = cli.store.unwrap_or_else(default_store_path);
    let path = Path::new(&path_str);
    let owner = OwnerId::new(cli.owner);

    match cli.command {
        Command::Create {
            name,
            description,
            status,
        } => collection_ops::create(path, &owner, &name, description, &status),
        Command::List => collection_ops::list(path, &owner),
        Command::Show { name } => collection_ops::show(path, &owner, &name),
        Command::Edit {
            name,
            rename,
            description,
            status,
        } => collection_ops::edit(path, &owner, &name, rename, description, status),
        Command::Delete { name } => collection_ops::delete(path, &owner, &name),
        Command::Add {
            collection,
            value,
            label,
            note,
        } => entry_ops::add(path, &owner, &collection, &value, label, note),
        Command::Remove {
            collection,
            entry_id,
        } => entry_ops::remove(path, &owner, &collection, entry_id),
        Command::Numbers { collection } => entry_ops::list(path, &owner, &collection),
        Command::MarkWinner {
            collection,
            entry_id,
        } => entry_ops::mark_winner(path, &owner, &collection, entry_id),
        Command::ClearWinner {
            collection,
            entry_id,
        } => entry_ops::clear_winner(path, &owner, &collection, entry_id),
        Command::Search { collection, query } => {
            search_ops::search(path, &owner, &collection, &query)
        }
        Command::Import { file } => bulk_ops::import(path, &owner, &file),
        Command::Export { collection, output } => {
            bulk_ops::export(path, &owner, collection.as_deref(), output.as_deref())
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
