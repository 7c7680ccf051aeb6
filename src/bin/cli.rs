//! Marketing Bot CLI
//!
//! Command-line interface over the same store the web UI uses:
//! - Browse the dashboard, calendar and review queue
//! - Generate copy and send it to the queue
//! - Approve, reject, publish, edit and delete content
//! - Run compliance checks, browse and search the knowledge base

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use marketing_bot::config::{self, Config, LoggingConfig};
use marketing_bot::knowledge::{KnowledgeBase, KnowledgeStats, SearchResults};
use marketing_bot::store::{
    CalendarUpdate, ContentItem, ContentType, FileBackend, NewCalendarEntry, Platform, Status,
    Store,
};
use marketing_bot::views::{self, EMPTY_CELL, TITLE_CHARS, TOPIC_CHARS};
use marketing_bot::{compliance, ComplianceReport, ContentAction, Generator};

#[derive(Parser)]
#[command(name = "marketing-bot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Content calendar, generation and compliance review")]
#[command(long_about = "Marketing Bot plans, drafts and reviews marketing copy.\nContent moves from the queue through approval to publication.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show stats, recent activity and upcoming calendar entries
    Dashboard,

    /// Manage the content calendar
    Calendar {
        #[command(subcommand)]
        action: CalendarCommand,
    },

    /// Generate copy from templates
    Generate {
        /// Content type (blog_post, linkedin_post, market_report)
        #[arg(short = 't', long = "type", default_value = "blog_post")]
        content_type: String,
        /// Topic, used as the title
        #[arg(long, default_value = "")]
        topic: String,
        /// Principal responsible for the content
        #[arg(short, long, default_value = "")]
        principal: String,
        /// Platform (website, linkedin, twitter); defaults by type
        #[arg(long)]
        platform: Option<Platform>,
        /// Send the result to the review queue
        #[arg(long)]
        queue: bool,
    },

    /// Show the review queue, or one item in detail
    Review {
        /// Content id
        id: Option<String>,
    },

    /// Approve a draft or queued item
    Approve { id: String },

    /// Reject a draft or queued item
    Reject { id: String },

    /// Publish an approved item
    Publish { id: String },

    /// Edit title and body; a rejected item goes back to the queue
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, conflicts_with = "body_file")]
        body: Option<String>,
        /// Read the body from a file
        #[arg(long)]
        body_file: Option<PathBuf>,
    },

    /// Delete a content item
    Delete { id: String },

    /// Run the compliance check on text (argument, file or stdin)
    Check {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Content type, enables disclaimer suggestions
        #[arg(short = 't', long = "type")]
        content_type: Option<ContentType>,
    },

    /// Browse and search the knowledge base (default: facts)
    Kb {
        #[command(subcommand)]
        command: Option<KbCommand>,
    },

    /// Discard all changes and restore the default data
    Reset,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CalendarCommand {
    /// List entries by date
    List,

    /// Add an entry
    Add {
        /// Planned date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[arg(short = 't', long = "type")]
        content_type: ContentType,
        #[arg(long)]
        topic: String,
        #[arg(short, long)]
        principal: String,
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Change fields of an entry
    Edit {
        id: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(short = 't', long = "type")]
        content_type: Option<ContentType>,
        #[arg(long)]
        topic: Option<String>,
        #[arg(short, long)]
        principal: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        status: Option<Status>,
    },

    /// Delete an entry
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum KbCommand {
    /// Firm facts by category
    Facts,
    /// Market data points
    Market,
    /// Where market data comes from
    Sources,
    /// Brand rules
    Rules,
    /// Search facts, market data, sources, rules and stored content
    Search { query: String },
    /// Counts per section and content per status
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_tracing(&config.logging);

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let store_path = config.storage.store_path();
    tracing::debug!("Store file: {:?}", store_path);

    let store = Store::new(FileBackend::new(&store_path));
    store
        .init()
        .with_context(|| format!("Failed to open store at {:?}", store_path))?;

    let json = cli.format == OutputFormat::Json;

    match cli.command {
        Commands::Dashboard => {
            let dash = views::dashboard(&store.calendar()?, &store.content()?, store.today());
            if json {
                return print_json(&dash);
            }

            let stats = dash.stats;
            println!(
                "Pending Review: {}   Published: {}   Upcoming: {}   Total Content: {}",
                stats.pending, stats.published, stats.upcoming, stats.total
            );

            println!();
            println!("Recent Activity");
            println!("{}", "-".repeat(70));
            if dash.recent.is_empty() {
                println!("No content yet.");
            }
            for item in &dash.recent {
                println!("{:<56} {}", views::truncate(&item.title, TITLE_CHARS), item.status);
            }

            println!();
            println!("Upcoming");
            println!("{}", "-".repeat(70));
            if dash.upcoming.is_empty() {
                println!("No upcoming entries.");
            }
            for entry in &dash.upcoming {
                println!(
                    "{:<14} {:<42} {}",
                    views::format_date(Some(entry.date)),
                    views::clip(&entry.topic, TOPIC_CHARS),
                    entry.content_type.label()
                );
            }
        }

        Commands::Calendar { action } => match action {
            CalendarCommand::List => {
                let rows = views::calendar_rows(&store.calendar()?);
                if json {
                    return print_json(&rows);
                }
                if rows.is_empty() {
                    println!("No calendar entries.");
                    return Ok(());
                }

                println!(
                    "{:<18} {:<14} {:<14} {:<9} {:<20} {}",
                    "ID", "Date", "Type", "Status", "Principal", "Topic"
                );
                println!("{}", "-".repeat(110));
                for entry in rows {
                    println!(
                        "{:<18} {:<14} {:<14} {:<9} {:<20} {}",
                        entry.id,
                        views::format_date(Some(entry.date)),
                        entry.content_type.label(),
                        entry.status,
                        entry.principal,
                        entry.topic
                    );
                }
            }

            CalendarCommand::Add {
                date,
                content_type,
                topic,
                principal,
                notes,
            } => {
                let entry = store.add_calendar_entry(NewCalendarEntry {
                    date,
                    content_type,
                    topic,
                    principal,
                    notes,
                })?;
                if json {
                    return print_json(&entry);
                }
                println!("Calendar entry added: {}", entry.id);
            }

            CalendarCommand::Edit {
                id,
                date,
                content_type,
                topic,
                principal,
                notes,
                status,
            } => {
                let update = CalendarUpdate {
                    date,
                    content_type,
                    topic,
                    principal,
                    notes,
                    status,
                };
                if update.is_empty() {
                    bail!("Nothing to change; pass at least one field");
                }

                let Some(entry) = store.update_calendar_entry(&id, update)? else {
                    bail!("No calendar entry with id {}", id);
                };
                if json {
                    return print_json(&entry);
                }
                println!("Calendar entry updated: {}", entry.id);
            }

            CalendarCommand::Delete { id } => {
                if !store.delete_calendar_entry(&id)? {
                    bail!("No calendar entry with id {}", id);
                }
                println!("Calendar entry deleted");
            }
        },

        Commands::Generate {
            content_type,
            topic,
            principal,
            platform,
            queue,
        } => {
            let draft = Generator::new().generate_named(&content_type, &topic, &principal);
            let platform = platform.unwrap_or_else(|| draft.content_type.default_platform());
            let report = compliance::check_content(&draft.body, draft.content_type);

            if queue {
                let item = store.add_content(draft.into_new_item(platform, Status::Queued))?;
                if json {
                    return print_json(&item);
                }
                print_item(&item, &report);
                println!();
                println!("Content sent to review queue: {}", item.id);
                return Ok(());
            }

            if json {
                return print_json(&serde_json::json!({
                    "title": draft.title,
                    "body": draft.body,
                    "type": draft.content_type,
                    "platform": platform,
                    "principal": draft.principal,
                    "compliance": report,
                }));
            }

            println!("{}", draft.title);
            println!(
                "{} | {} | {}",
                draft.content_type.label(),
                platform,
                or_dash(&draft.principal)
            );
            println!();
            println!("{}", draft.body);
            println!();
            print_compliance(&report);
        }

        Commands::Review { id: None } => {
            let rows = views::review_queue(&store.content()?);
            if json {
                return print_json(&rows);
            }
            if rows.is_empty() {
                println!("No content items.");
                return Ok(());
            }

            println!(
                "{:<22} {:<54} {:<14} {:<9} {:<9} {:<10} {:<20} {}",
                "ID", "Title", "Type", "Platform", "Status", "Compliance", "Principal", "Created"
            );
            println!("{}", "-".repeat(160));
            for row in rows {
                let item = &row.item;
                println!(
                    "{:<22} {:<54} {:<14} {:<9} {:<9} {:<10} {:<20} {}",
                    item.id,
                    views::truncate(&item.title, TITLE_CHARS),
                    item.content_type.label(),
                    item.platform,
                    item.status,
                    row.compliance.label(),
                    item.principal,
                    views::format_date(Some(item.created))
                );
            }
        }

        Commands::Review { id: Some(id) } => {
            let item = found(store.content_by_id(&id)?, &id)?;
            let report = compliance::check_content(&item.body, item.content_type);
            if json {
                return print_json(&serde_json::json!({
                    "item": item,
                    "compliance": report,
                }));
            }
            print_item(&item, &report);

            let actions: Vec<_> = views::detail_actions(&item)
                .into_iter()
                .map(|(_, label)| label)
                .collect();
            println!();
            println!("Actions: {}", actions.join(", "));
        }

        Commands::Approve { id } => {
            let item = found(store.approve_content(&id)?, &id)?;
            report_action(&item, ContentAction::Approve, json)?;
        }

        Commands::Reject { id } => {
            let item = found(store.reject_content(&id)?, &id)?;
            report_action(&item, ContentAction::Reject, json)?;
        }

        Commands::Publish { id } => {
            let item = found(store.publish_content(&id)?, &id)?;
            report_action(&item, ContentAction::Publish, json)?;
        }

        Commands::Edit {
            id,
            title,
            body,
            body_file,
        } => {
            let current = found(store.content_by_id(&id)?, &id)?;
            let body = match body_file {
                Some(path) => Some(
                    std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {:?}", path))?,
                ),
                None => body,
            };
            if title.is_none() && body.is_none() {
                bail!("Nothing to change; pass --title, --body or --body-file");
            }

            let item = found(
                store.edit_content(
                    &id,
                    title.unwrap_or(current.title),
                    body.unwrap_or(current.body),
                )?,
                &id,
            )?;
            report_action(&item, ContentAction::Edit, json)?;
        }

        Commands::Delete { id } => {
            if !store.delete_content(&id)? {
                bail!("No content item with id {}", id);
            }
            println!("{}", ContentAction::Delete.done_message());
        }

        Commands::Check {
            text,
            file,
            content_type,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {:?}", path))?,
                (None, None) => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let report = match content_type {
                Some(content_type) => compliance::check_content(&text, content_type),
                None => compliance::check(&text),
            };
            if json {
                print_json(&report)?;
            } else {
                print_compliance(&report);
            }
            if !report.pass() {
                std::process::exit(1);
            }
        }

        Commands::Kb { command } => {
            let kb = KnowledgeBase::load().context("Bundled knowledge base is invalid")?;
            match command.unwrap_or(KbCommand::Facts) {
                KbCommand::Facts => print_facts(&kb),
                KbCommand::Market => print_market(&kb),
                KbCommand::Sources => print_sources(&kb),
                KbCommand::Rules => print_rules(&kb),
                KbCommand::Search { query } => {
                    let results = kb.search(&query, &store.content()?);
                    if json {
                        return print_json(&results);
                    }
                    print_search(&query, &results);
                }
                KbCommand::Stats => {
                    let stats = kb.stats(&store.content()?);
                    if json {
                        return print_json(&stats);
                    }
                    print_stats(&stats);
                }
            }
        }

        Commands::Reset => {
            store.reset()?;
            println!("Data reset to defaults");
        }

        // Written before the store is opened
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("marketing_bot={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = config::generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }
    Ok(())
}

fn found<T>(value: Option<T>, id: &str) -> anyhow::Result<T> {
    value.with_context(|| format!("No content item with id {}", id))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_CELL
    } else {
        value
    }
}

fn report_action(item: &ContentItem, action: ContentAction, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(item);
    }
    println!("{} ({} is now {})", action.done_message(), item.id, item.status);
    Ok(())
}

fn print_item(item: &ContentItem, report: &ComplianceReport) {
    println!("{}", item.title);
    println!("{}", "=".repeat(item.title.chars().count().min(80)));
    println!();
    println!("{}", item.body);
    println!();
    for (label, value) in views::detail_fields(item) {
        println!("{:<12} {}", label, value);
    }
    println!();
    print_compliance(report);
}

fn print_compliance(report: &ComplianceReport) {
    println!("Compliance: {}", report.label());
    for message in report.messages() {
        println!("  - {}", message);
    }
    for suggestion in report.suggestion_messages() {
        println!("  * {}", suggestion);
    }
}

fn print_facts(kb: &KnowledgeBase) {
    for category in &kb.firm_facts {
        println!("{}", category.label);
        println!("{}", "-".repeat(60));
        for fact in &category.facts {
            println!("  {:<32} {}", fact.label, fact.value);
        }
        println!();
    }
}

fn print_market(kb: &KnowledgeBase) {
    for snapshot in &kb.market_data {
        println!("{}", snapshot.title());
        println!("{}", "-".repeat(60));
        for point in &snapshot.points {
            println!("  {:<32} {:<16} {}", point.metric, point.value, point.source);
        }
        println!();
    }
}

fn print_sources(kb: &KnowledgeBase) {
    println!("{:<28} {:<12} {:<40} {}", "Source", "Frequency", "URL", "Notes");
    println!("{}", "-".repeat(120));
    for source in &kb.data_sources {
        println!(
            "{:<28} {:<12} {:<40} {}",
            source.name,
            source.frequency,
            source.url.as_deref().unwrap_or(EMPTY_CELL),
            source.notes
        );
    }
}

fn print_rules(kb: &KnowledgeBase) {
    for group in &kb.brand_rules {
        println!("{}", group.label);
        println!("{}", "-".repeat(60));
        for rule in &group.rules {
            println!("  - {}", rule.rule);
            if group.has_examples() {
                if let Some(example) = &rule.example {
                    println!("      e.g. {}", example);
                }
            }
        }
        println!();
    }
}

fn print_search(query: &str, results: &SearchResults) {
    if results.is_empty() {
        println!("No results for {:?}", query);
        return;
    }

    if !results.facts.is_empty() {
        println!("Firm Facts");
        for hit in &results.facts {
            println!("  [{}] {}: {}", hit.category, hit.fact.label, hit.fact.value);
        }
        println!();
    }
    if !results.market.is_empty() {
        println!("Market Data");
        for hit in &results.market {
            println!("  {} {}: {}", hit.market, hit.point.metric, hit.point.value);
        }
        println!();
    }
    if !results.sources.is_empty() {
        println!("Data Sources");
        for source in &results.sources {
            println!("  {} ({})", source.name, source.frequency);
        }
        println!();
    }
    if !results.rules.is_empty() {
        println!("Brand Rules");
        for hit in &results.rules {
            println!("  [{}] {}", hit.group, hit.rule.rule);
        }
        println!();
    }
    if !results.content.is_empty() {
        println!("Content");
        for hit in &results.content {
            println!("  {} [{}] {}", hit.id, hit.content_type, hit.excerpt);
        }
    }
}

fn print_stats(stats: &KnowledgeStats) {
    println!("{:<24} {}", "Firm Facts", stats.facts);
    println!("{:<24} {}", "Market Data Points", stats.market_points);
    println!("{:<24} {}", "Brand Rules", stats.rules);
    println!("{:<24} {}", "Data Sources", stats.sources);
    println!("{:<24} {}", "Total Content", stats.content_total);
    for entry in &stats.content_by_status {
        println!("  {:<22} {}", format!("Content ({})", entry.status), entry.count);
    }
}
