//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use readscout_core::{ReadingResolver, SearchProvider};
use readscout_query::{build_query, official_docs_url};
use readscout_ranking::split_blocks;
use readscout_shared::{
    AppConfig, ReadScoutError, ResolveRequest, SubjectCategory, init_config, load_config,
};
use readscout_topic::{extract_tech_keywords, is_meta_session, normalize};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ReadScout — resolve learning topics to validated reading URLs.
#[derive(Parser)]
#[command(
    name = "readscout",
    version,
    about = "Resolve syllabus topics to trusted, validated reading URLs.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Resolve a topic to the best validated reading URL.
    Resolve {
        /// Learning topic (e.g. "1. Pointers and memory allocation").
        topic: String,

        /// Free-text subject context (e.g. "C Programming, Data Structures").
        #[arg(short, long)]
        context: Option<String>,

        /// Subject category: programming, computer-science,
        /// vietnamese-politics, history, vietnamese-literature, science,
        /// business, or default.
        #[arg(long, default_value = "default")]
        category: String,

        /// File of raw search-result blocks (Title:/Link:/Snippet:,
        /// blank-line separated) to resolve against.
        #[arg(long)]
        results_file: Option<PathBuf>,

        /// URL already recommended before; skipped during resolution
        /// (can be repeated).
        #[arg(long)]
        exclude: Vec<String>,

        /// Print the full ranked candidate list instead of validating.
        #[arg(long)]
        ranked: bool,

        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the search query that would be issued for a topic.
    Query {
        /// Learning topic.
        topic: String,

        /// Free-text subject context.
        #[arg(short, long)]
        context: Option<String>,

        /// Subject category.
        #[arg(long, default_value = "default")]
        category: String,
    },

    /// Print the technology keywords extracted from a context string.
    Keywords {
        /// Free-text subject context.
        context: String,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "readscout=info",
        1 => "readscout=debug",
        _ => "readscout=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            topic,
            context,
            category,
            results_file,
            exclude,
            ranked,
            json,
        } => {
            cmd_resolve(
                &topic,
                context,
                &category,
                results_file.as_deref(),
                exclude,
                ranked,
                json,
            )
            .await
        }
        Command::Query {
            topic,
            context,
            category,
        } => cmd_query(&topic, context.as_deref(), &category),
        Command::Keywords { context } => cmd_keywords(&context),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn parse_category(s: &str) -> Result<SubjectCategory> {
    s.parse().map_err(|e: String| eyre!(e))
}

// ---------------------------------------------------------------------------
// Search providers
// ---------------------------------------------------------------------------

/// Serves pre-captured search results from a local file.
struct FileSearchProvider {
    hits: Vec<String>,
}

impl FileSearchProvider {
    fn load(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path)
            .map_err(|e| eyre!("cannot read results file '{}': {e}", path.display()))?;
        let hits = split_blocks(&payload);
        info!(path = %path.display(), hits = hits.len(), "loaded search results");
        Ok(Self { hits })
    }
}

#[async_trait]
impl SearchProvider for FileSearchProvider {
    async fn search(&self, _query: &str) -> readscout_shared::Result<Vec<String>> {
        Ok(self.hits.clone())
    }
}

/// Provider with no results; resolution then relies solely on the
/// official-documentation short-circuit.
struct EmptyProvider;

#[async_trait]
impl SearchProvider for EmptyProvider {
    async fn search(&self, _query: &str) -> readscout_shared::Result<Vec<String>> {
        Err(ReadScoutError::Network(
            "no search backend configured; pass --results-file".to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_resolve(
    topic: &str,
    context: Option<String>,
    category: &str,
    results_file: Option<&Path>,
    exclude: Vec<String>,
    ranked: bool,
    json: bool,
) -> Result<()> {
    let category = parse_category(category)?;
    let config = load_config()?;
    let resolver = ReadingResolver::new(&config)?;

    let provider: Box<dyn SearchProvider> = match results_file {
        Some(path) => Box::new(FileSearchProvider::load(path)?),
        None => Box::new(EmptyProvider),
    };

    let mut request = ResolveRequest::new(topic, context, category);
    request.prior_readings = exclude;

    info!(topic, %category, "resolving reading URL");

    if ranked {
        let candidates = resolver.resolve_ranked(provider.as_ref(), &request).await;
        if json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        } else if candidates.is_empty() {
            println!("No candidates survived filtering.");
        } else {
            for c in &candidates {
                println!("{:>6}  {}", c.score, c.url);
            }
        }
        return Ok(());
    }

    let spinner = if json { None } else { Some(resolve_spinner()) };
    let resolved = resolver.resolve(provider.as_ref(), &request).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "topic": topic,
                "category": category.to_string(),
                "url": resolved,
            }))?
        );
    } else {
        match resolved {
            Some(url) => println!("{url}"),
            None => println!("No suitable reading found."),
        }
    }

    Ok(())
}

fn resolve_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner.set_message("Resolving reading URL");
    spinner
}

fn cmd_query(topic: &str, context: Option<&str>, category: &str) -> Result<()> {
    let category = parse_category(category)?;
    let normalized = normalize(topic);

    if normalized.is_empty() {
        println!("Topic normalizes to empty; nothing to search.");
        return Ok(());
    }
    if is_meta_session(&normalized) {
        println!("Topic is an assessment session; no reading is searched.");
        return Ok(());
    }

    let context = context.unwrap_or("");
    let keywords = extract_tech_keywords(context);

    println!("Topic:    {normalized}");
    if !keywords.is_empty() {
        let tags: Vec<&str> = keywords.iter().map(|k| k.as_str()).collect();
        println!("Keywords: {}", tags.join(", "));
    }

    if let Some(url) = official_docs_url(&normalized, &keywords, category) {
        println!("Official: {url}");
        return Ok(());
    }

    println!("Query:    {}", build_query(&normalized, context, category));
    Ok(())
}

fn cmd_keywords(context: &str) -> Result<()> {
    let keywords = extract_tech_keywords(context);
    if keywords.is_empty() {
        println!("No technology keywords recognized.");
    } else {
        for k in &keywords {
            println!("{k}");
        }
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
