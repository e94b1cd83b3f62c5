use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tourdesk_cli::commands::{self, ItineraryEdit, ReadTarget};
use tourdesk_cli::config::CliConfig;
use tourdesk_cli::prefs::{Preferences, ThemeMode};
use tourdesk_cli::store;
use tourdesk_core::view::RawFilterParams;

const THEME_CHOICES: &[&str] = &["light", "dark", "system", "toggle"];

/// Tour-operator back office: inbox and quotation views.
#[derive(Parser, Debug)]
#[command(name = "tourdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inbox JSON store (overrides TOURDESK_INBOX_PATH)
    #[arg(long, global = true)]
    inbox: Option<PathBuf>,

    /// Quotation JSON store (overrides TOURDESK_QUOTES_PATH)
    #[arg(long, global = true)]
    quotes: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List inbox messages with whole-inbox statistics
    Inbox {
        #[arg(short, long, default_value = "")]
        search: String,
        /// Message kind, or "all"
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: String,
        #[arg(short, long)]
        priority: Option<String>,
        /// date, value, name or priority
        #[arg(long)]
        sort: Option<String>,
        /// ascending or descending
        #[arg(long)]
        order: Option<String>,
        /// Order by attention score instead of the sort key
        #[arg(long)]
        triage: bool,
    },
    /// Mark one message (or all) read or unread
    MarkRead {
        /// Message id; omit with --all
        id: Option<String>,
        #[arg(long, conflicts_with = "id")]
        all: bool,
        #[arg(long)]
        unread: bool,
    },
    /// List quotations with whole-table statistics
    Quotes {
        #[arg(short, long, default_value = "")]
        search: String,
        /// Quotation status, or "all"
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        order: Option<String>,
    },
    /// Start a new draft from an existing quotation
    CloneQuote {
        id: String,
        #[arg(long)]
        new_id: Option<String>,
    },
    /// Edit the day-by-day itinerary of a quotation
    Itinerary {
        id: String,
        #[command(subcommand)]
        edit: DayCommand,
    },
    /// Show or change the theme mode (light, dark, system, toggle)
    Theme { mode: Option<String> },
}

#[derive(Subcommand, Debug)]
enum DayCommand {
    /// Append a day, or insert it at --at
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        at: Option<u32>,
    },
    Remove { day: u32 },
    Move { from: u32, to: u32 },
    Activity { day: u32, activity: String },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let mut config = CliConfig::from_env();

    // --- Tracing ---
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    if cli.inbox.is_some() {
        config.inbox_path = cli.inbox;
    }
    if cli.quotes.is_some() {
        config.quotes_path = cli.quotes;
    }
    tracing::debug!(?config, "Loaded CLI configuration");

    run(cli.command, &config)
}

fn run(command: Command, config: &CliConfig) -> anyhow::Result<()> {
    match command {
        Command::Inbox {
            search,
            kind,
            priority,
            sort,
            order,
            triage,
        } => {
            let store = store::load_inbox(config.inbox_path.as_deref())?;
            let raw = RawFilterParams {
                search_term: search,
                filter_type: kind,
                priority_filter: priority,
                sort_by: sort,
                sort_order: order,
            };
            print_json(&commands::inbox_view(&store, &raw, triage))
        }
        Command::MarkRead { id, all, unread } => {
            let target = match (id, all) {
                (Some(id), false) => ReadTarget::One(id),
                (None, true) => ReadTarget::All,
                _ => anyhow::bail!("Pass a message id or --all"),
            };
            let mut store = store::load_inbox(config.inbox_path.as_deref())?;
            let changed = commands::set_read_state(&mut store, &target, !unread)?;
            persist(config.inbox_path.as_deref(), &store)?;
            print_json(&serde_json::json!({
                "changed": changed,
                "stats": tourdesk_core::view::summarize_inbox(&store),
            }))
        }
        Command::Quotes {
            search,
            status,
            sort,
            order,
        } => {
            let store = store::load_quotations(config.quotes_path.as_deref())?;
            let raw = RawFilterParams {
                search_term: search,
                filter_type: status,
                priority_filter: None,
                sort_by: sort,
                sort_order: order,
            };
            print_json(&commands::quotation_view(&store, &raw))
        }
        Command::CloneQuote { id, new_id } => {
            let mut store = store::load_quotations(config.quotes_path.as_deref())?;
            let index = commands::clone_into_store(&mut store, &id, new_id, chrono::Utc::now())?;
            persist(config.quotes_path.as_deref(), &store)?;
            print_json(&store[index])
        }
        Command::Itinerary { id, edit } => {
            let edit = match edit {
                DayCommand::Add {
                    title,
                    location,
                    at,
                } => ItineraryEdit::Add {
                    title,
                    location,
                    at,
                },
                DayCommand::Remove { day } => ItineraryEdit::Remove { day },
                DayCommand::Move { from, to } => ItineraryEdit::Move { from, to },
                DayCommand::Activity { day, activity } => {
                    ItineraryEdit::AddActivity { day, activity }
                }
            };
            let mut store = store::load_quotations(config.quotes_path.as_deref())?;
            commands::edit_itinerary(&mut store, &id, edit)?;
            persist(config.quotes_path.as_deref(), &store)?;
            let quote = store
                .iter()
                .find(|q| q.id == id)
                .context("Edited quotation disappeared from the store")?;
            print_json(&quote.itinerary)
        }
        Command::Theme { mode } => {
            let mut prefs = Preferences::load(&config.prefs_path);
            if let Some(mode) = mode {
                prefs.theme_mode = if mode.eq_ignore_ascii_case("toggle") {
                    prefs.theme_mode.toggled()
                } else {
                    ThemeMode::parse(&mode).with_context(|| {
                        format!(
                            "Invalid theme mode '{mode}'. Must be one of: {}",
                            THEME_CHOICES.join(", ")
                        )
                    })?
                };
                prefs.save(&config.prefs_path)?;
                tracing::info!(mode = prefs.theme_mode.as_str(), "Saved theme mode");
            }
            print_json(&prefs)
        }
    }
}

/// Write the store back if it came from a file. Edits to the bundled demo
/// data only live for this invocation.
fn persist<T: Serialize>(path: Option<&std::path::Path>, records: &[T]) -> anyhow::Result<()> {
    match path {
        Some(path) => store::save_json(path, records),
        None => {
            tracing::warn!("No store path configured; changes to demo data are not saved");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
