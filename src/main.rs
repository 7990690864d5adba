//! daily CLI: section-structured standup notes.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use miette::Result;

use daily::config::Config;
use daily::journal::Journal;
use daily::section::SectionKey;

#[derive(Parser)]
#[command(name = "daily", version, about = "Daily standup notes, one Markdown file per day")]
struct Cli {
    /// Date to operate on (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record something you finished (Done section).
    Did {
        /// Entry text.
        text: String,
        /// Comma-separated tags, e.g. --tags cicd,aws.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Record something you intend to do (To Do section).
    Plan {
        /// Entry text.
        text: String,
        /// Comma-separated tags.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Record something blocking you (Blockers section).
    Block {
        /// Entry text.
        text: String,
        /// Comma-separated tags.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Record a meeting (Meetings section).
    Meeting {
        /// Entry text.
        text: String,
        /// Comma-separated tags.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Record a quick note (Quick Notes section).
    Notes {
        /// Entry text.
        text: String,
        /// Comma-separated tags.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Show the entries of one section.
    Show {
        /// Section key: did, plan, block, meeting or notes.
        section: String,
        /// Keep only entries carrying at least one of these tags.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Print the standup cheat sheet (Done, Meetings, To Do, Blockers).
    Cheat {
        /// Keep only entries carrying at least one of these tags.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Emit the summary as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file at ~/.daily/config.toml.
    Init,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    if let Commands::Init = cli.command {
        let path = Config::write_default()?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    // The environment is consulted exactly once, here; everything below
    // works off the resolved directory.
    let env_dir = std::env::var("DAILY_DIR").ok();
    let dir = Config::resolve_dailies_dir(env_dir.as_deref())?;
    let journal = Journal::new(dir);

    match cli.command {
        Commands::Did { text, tags } => add(&journal, SectionKey::Did, &text, &tags, date)?,
        Commands::Plan { text, tags } => add(&journal, SectionKey::Plan, &text, &tags, date)?,
        Commands::Block { text, tags } => add(&journal, SectionKey::Block, &text, &tags, date)?,
        Commands::Meeting { text, tags } => add(&journal, SectionKey::Meeting, &text, &tags, date)?,
        Commands::Notes { text, tags } => add(&journal, SectionKey::Notes, &text, &tags, date)?,

        Commands::Show { section, tags } => {
            // Section-key validation happens before any document I/O.
            let key: SectionKey = section.parse().map_err(daily::DailyError::from)?;
            let items = if tags.is_empty() {
                journal.entries(key, date)?
            } else {
                journal.entries_tagged(key, &tags, date)?
            };
            if items.is_empty() {
                println!("(no entries)");
            } else {
                for item in &items {
                    println!("- {item}");
                }
            }
        }

        Commands::Cheat { tags, json } => {
            if json {
                println!("{}", journal.summary_json(&tags, date)?);
            } else {
                println!("{}", journal.summary_text(&tags, date)?);
            }
        }

        Commands::Init => unreachable!("handled before journal setup"),
    }

    Ok(())
}

fn add(
    journal: &Journal,
    key: SectionKey,
    text: &str,
    tags: &[String],
    date: NaiveDate,
) -> Result<()> {
    let path = journal.add_entry(key, text, tags, date)?;
    println!("Added to {key} in {}", path.display());
    Ok(())
}
