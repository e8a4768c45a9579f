mod commands;
mod input;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use agenda_core::agenda::Agenda;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Manage your local list of tasks and events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new event
    Add {
        title: Option<String>,

        /// What the event is about
        #[arg(short, long)]
        description: Option<String>,

        /// Due date (e.g. "2025-03-20", "tomorrow", "next friday")
        #[arg(long)]
        due: Option<String>,
    },
    /// Edit an existing event
    Edit {
        /// Event id (a unique prefix is enough)
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// New due date (e.g. "2025-03-20", "tomorrow")
        #[arg(long)]
        due: Option<String>,
    },
    /// List all events
    List,
    /// Delete an event (asks for confirmation)
    Delete {
        /// Event id (a unique prefix is enough)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Print the location of the event store
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            description,
            due,
        } => commands::add::run(title, description, due),
        Commands::Edit {
            id,
            title,
            description,
            due,
        } => commands::edit::run(&id, title, description, due),
        Commands::List => commands::list::run(),
        Commands::Delete { id, force } => commands::delete::run(&id, force),
        Commands::Path => {
            let agenda = Agenda::load()?;
            println!("{}", agenda.store().path().display());
            Ok(())
        }
    }
}
