//! index-view: browse and render index pages from the terminal.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use index_view::{
    AppConfig, IndexQuery,
    cli::{self, RenderConfig, ViewConfig},
    config::Validatable,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "index-view")]
#[command(version, about = "Browse index pages: sortable tables with filters and pagination", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Browse a document interactively
    index-view view employees.json

    # Start on page 2 with 25 rows per page
    index-view view employees.json --query 'page=2&per_page=25'

    # Print a filtered, sorted page as text
    index-view render employees.json --filter unit=IT --sort name --desc

    # Write an example config file
    index-view config init")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Request options shared by `view` and `render`
#[derive(Parser)]
struct QueryArgs {
    /// Initial query string, e.g. "page=2&per_page=25&status=aktif"
    #[arg(long)]
    query: Option<String>,

    /// Page number (overrides --query)
    #[arg(long)]
    page: Option<u32>,

    /// Rows per page (overrides --query and the config file)
    #[arg(long)]
    per_page: Option<u32>,

    /// Search text
    #[arg(short, long)]
    search: Option<String>,

    /// Filter as key=value; may be repeated
    #[arg(short, long = "filter", value_parser = cli::parse_filter_arg)]
    filters: Vec<(String, String)>,
}

impl QueryArgs {
    fn to_query(&self, default_per_page: u32) -> IndexQuery {
        let mut query = match &self.query {
            Some(raw) => IndexQuery::parse(raw),
            None => IndexQuery::new().with_per_page(default_per_page),
        };
        if let Some(page) = self.page {
            query.page = page.max(1);
        }
        if let Some(per_page) = self.per_page {
            query.per_page = per_page.max(1);
        }
        if let Some(search) = &self.search {
            query.search.clone_from(search);
        }
        for (key, value) in &self.filters {
            query.filters.set(key.as_str(), value.as_str());
        }
        query
    }
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Index document (JSON or YAML)
    document: PathBuf,

    #[command(flatten)]
    query: QueryArgs,

    /// Theme: dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,

    /// Notification feed (JSON list); enables the bell
    #[arg(long)]
    notifications: Option<PathBuf>,

    /// Seconds between notification polls
    #[arg(long)]
    poll_interval: Option<u64>,
}

/// Arguments for the `render` subcommand
#[derive(Parser)]
struct RenderArgs {
    /// Index document (JSON or YAML)
    document: PathBuf,

    #[command(flatten)]
    query: QueryArgs,

    /// Sort the page by this column
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending (with --sort)
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Print only the table and pagination
    #[arg(long)]
    bare: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a document in the terminal UI
    View(ViewArgs),

    /// Print one page of a document as text
    Render(RenderArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .index-view.yaml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, Commands::View(_));
    init_logging(cli.verbose, cli.quiet, interactive);

    match cli.command {
        Commands::View(args) => {
            let mut overrides = AppConfig::builder();
            if let Some(theme) = args.theme {
                overrides = overrides.theme(theme);
            }
            if let Some(feed) = args.notifications {
                overrides = overrides.notification_feed(feed);
            }
            if let Some(secs) = args.poll_interval {
                overrides = overrides.poll_interval_secs(secs);
            }
            let app = load_config(cli.config.as_deref(), &overrides.build())?;
            let query = args.query.to_query(app.tui.default_per_page);
            cli::run_view(ViewConfig {
                document: args.document,
                query,
                app,
            })
        }

        Commands::Render(args) => {
            let app = load_config(cli.config.as_deref(), &AppConfig::default())?;
            cli::run_render(RenderConfig {
                document: args.document,
                query: args.query.to_query(app.tui.default_per_page),
                sort: args.sort,
                descending: args.desc,
                labels: app.labels,
                chrome: !args.bare,
                output: args.output,
            })
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(cli.config.as_deref()),
            ConfigAction::Path => {
                cli::run_config_path(cli.config.as_deref());
                Ok(())
            }
            ConfigAction::Init { force } => {
                let cwd = std::env::current_dir().context("cannot determine current directory")?;
                cli::run_config_init(&cwd, force).map(|_| ())
            }
            ConfigAction::Schema { output } => cli::run_config_schema(output.as_deref()),
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "index-view", &mut io::stdout());
            Ok(())
        }
    }
}

/// Load the config file, layer CLI overrides on top and validate the result.
fn load_config(path: Option<&std::path::Path>, overrides: &AppConfig) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(path, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!(path = %path.display(), "using config file");
    }
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(config)
}

/// Initialize tracing. The terminal UI owns stdout/stderr, so interactive
/// runs log to a file under the user cache directory instead.
fn init_logging(verbose: bool, quiet: bool, interactive: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_file = interactive
        .then(|| {
            let dir = dirs::cache_dir()?.join("index-view");
            std::fs::create_dir_all(&dir).ok()?;
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("index-view.log"))
                .ok()
        })
        .flatten();

    match log_file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init(),
        None if interactive => tracing_subscriber::registry().with(filter).init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
