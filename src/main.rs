//! `cms-drafts`: operator CLI for CMS admin form drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Editors' in-progress "new entity" forms are kept as JSON snapshots, one
//! per entity kind. This tool inspects, validates, clears, and submits the
//! snapshots in a draft directory, and checks slug availability against the
//! CMS backend.
//!
//! Configuration comes from flags, the environment, and a `.env` file:
//! `CMS_DRAFTS_DIR`, `CMS_API_URL`, `CMS_API_TOKEN`, and `RUST_LOG`.

mod api;
mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drafts::{EntityKind, FileStorage, validate_slug};
use serde::Serialize;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::api::ApiClient;
use crate::commands::with_form;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "cms-drafts", version, about = "Inspect and submit CMS admin form drafts")]
struct Cli {
    /// Directory holding one `<storage key>.json` file per draft.
    #[arg(long, env = "CMS_DRAFTS_DIR", default_value = ".cms-drafts")]
    drafts_dir: PathBuf,

    #[arg(long, env = "CMS_API_URL", default_value = "http://127.0.0.1:3000")]
    api_url: String,

    #[arg(long, env = "CMS_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Log filter directive, e.g. `info` or `drafts=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize the stored draft for every entity kind.
    List,
    /// Print a stored draft snapshot.
    Show { kind: EntityKind },
    /// Delete stored drafts.
    Clear {
        #[arg(required_unless_present = "all")]
        kind: Option<EntityKind>,
        #[arg(long, default_value_t = false, conflicts_with = "kind")]
        all: bool,
    },
    /// Check a stored draft against its submission rules.
    Validate { kind: EntityKind },
    /// Ask the backend whether a slug is free.
    CheckSlug { kind: EntityKind, slug: String },
    /// Create the entity from its stored draft, then clear the draft.
    Submit { kind: EntityKind },
    /// List uploaded media.
    Media,
    /// Show autosave timing per entity kind.
    Policies,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
    if let Err(e) = dotenv
        && !e.not_found()
    {
        tracing::warn!(error = %e, "ignoring unreadable .env file");
    }

    run(cli).await
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let now = OffsetDateTime::now_utc();
    match cli.command {
        Command::List => {
            let storage = FileStorage::open(&cli.drafts_dir)?;
            print_json(&commands::list(&storage, now))
        }
        Command::Show { kind } => {
            let storage = FileStorage::open(&cli.drafts_dir)?;
            let snapshot = with_form!(kind, F => commands::show::<F, _>(&storage))?;
            print_json(&snapshot)
        }
        Command::Clear { kind, all } => {
            let storage = FileStorage::open(&cli.drafts_dir)?;
            let kinds = if all { EntityKind::ALL.to_vec() } else { kind.into_iter().collect() };
            for kind in kinds {
                with_form!(kind, F => commands::clear::<F, _>(&storage))?;
                println!("cleared {}", kind.storage_key());
            }
            Ok(())
        }
        Command::Validate { kind } => {
            let storage = FileStorage::open(&cli.drafts_dir)?;
            let outcome = with_form!(kind, F => commands::validate::<F, _>(&storage));
            if let Err(CliError::Invalid(errors)) = &outcome {
                for error in errors {
                    eprintln!("{}: {}", error.field, error.message);
                }
            }
            outcome?;
            println!("{kind} draft is valid");
            Ok(())
        }
        Command::CheckSlug { kind, slug } => {
            validate_slug(&slug)?;
            let api = ApiClient::new(&cli.api_url, cli.api_token.as_deref())?;
            let available = api.check_slug(kind, &slug).await?;
            print_json(&serde_json::json!({ "slug": slug, "available": available }))
        }
        Command::Submit { kind } => {
            let storage = FileStorage::open(&cli.drafts_dir)?;
            let api = ApiClient::new(&cli.api_url, cli.api_token.as_deref())?;
            let created = with_form!(kind, F => commands::submit::<F, _>(&storage, &api, now).await)?;
            print_json(&created)
        }
        Command::Media => {
            let api = ApiClient::new(&cli.api_url, cli.api_token.as_deref())?;
            print_json(&api.list_media().await?)
        }
        Command::Policies => print_json(&commands::policies()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
