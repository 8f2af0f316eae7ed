//! `tripdesk` — command-line front end for the travel admin API.
//!
//! Configuration comes from the environment (a `.env` file is loaded first);
//! see [`tripdesk_client::ClientConfig`] for the variables.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::App;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the admin API (overrides `TRIPDESK_API_URL`).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// List destinations with their translations.
    List,
    /// List location options (`<state>, <country>`) and categories.
    References,
    /// Print a form template, prefilled from `--id` when given.
    Template {
        #[arg(long)]
        id: Option<String>,
    },
    /// Validate a JSON form and save it (create, or update `--id`).
    Submit {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        id: Option<String>,
    },
    /// Delete a destination.
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tripdesk_observability::init();

    let args = Args::parse();
    let app = App::from_env(args.api_url)?;

    match args.command {
        Command::Login { email, password } => app.login(email, password).await,
        Command::List => app.list().await,
        Command::References => app.references().await,
        Command::Template { id } => app.template(id).await,
        Command::Submit { file, id } => app.submit(&file, id).await,
        Command::Delete { id } => app.delete(id).await,
    }
}
