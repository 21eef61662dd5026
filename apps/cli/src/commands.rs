//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use portfolio_core::pipeline::{self, PipelineReport, RecordSource};
use portfolio_core::{Catalog, PageState, ProjectPage, export, mock};
use portfolio_shared::{
    AppConfig, ContentRecord, ExportFormat, InvalidContentPolicy, PipelineConfig, init_config,
    load_config, load_config_from,
};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Portfolio: turn project markdown into the site's data module.
#[derive(Parser)]
#[command(
    name = "portfolio",
    version,
    about = "Build the portfolio site's project data from markdown content files.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Project root (content and export paths are resolved against it).
    #[arg(long, default_value = ".", global = true, env = "PORTFOLIO_ROOT")]
    pub root: PathBuf,

    /// Config file (defaults to <root>/portfolio.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Invalid content handling: abort or skip (overrides config).
    #[arg(long, global = true)]
    pub on_invalid: Option<InvalidContentPolicy>,

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
    /// Discover content, keep published projects, and write the data module.
    Build {
        /// Artifact format: module or json (overrides config).
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Artifact path (overrides config).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate content without writing anything.
    Check,

    /// List discovered projects.
    List {
        /// Include unpublished projects.
        #[arg(long)]
        all: bool,
    },

    /// Look up one project by slug, as the detail page would.
    Show {
        /// Project slug.
        slug: String,

        /// Read records from a previously exported artifact.
        #[arg(long, conflicts_with = "mock")]
        from: Option<PathBuf>,

        /// Use the built-in sample projects.
        #[arg(long)]
        mock: bool,
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
    /// Write a default portfolio.toml into the project root.
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
        0 => "portfolio=info",
        1 => "portfolio=debug",
        _ => "portfolio=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = app_config(&cli.root, cli.config.as_deref())?;
    let mut pipeline = PipelineConfig::resolve(&config, &cli.root);
    if let Some(policy) = cli.on_invalid {
        pipeline.on_invalid = policy;
    }

    match cli.command {
        Command::Build { format, out } => cmd_build(pipeline, format, out),
        Command::Check => cmd_check(&pipeline),
        Command::List { all } => cmd_list(&pipeline, all),
        Command::Show { slug, from, mock } => {
            cmd_show(&config, &pipeline, &slug, from.as_deref(), mock)
        }
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(&cli.root),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

fn app_config(root: &Path, explicit: Option<&Path>) -> Result<AppConfig> {
    let config = match explicit {
        Some(path) => load_config_from(path)?,
        None => load_config(root)?,
    };
    Ok(config)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_build(
    mut pipeline: PipelineConfig,
    format: Option<ExportFormat>,
    out: Option<PathBuf>,
) -> Result<()> {
    if let Some(format) = format {
        pipeline.export_format = format;
    }
    if let Some(out) = out {
        pipeline.export_path = out;
    }

    info!(
        content = %pipeline.content_dir.display(),
        target = %pipeline.export_path.display(),
        format = %pipeline.export_format,
        "building project data"
    );

    let result = pipeline::build(&pipeline)?;

    println!();
    println!("  Project data written!");
    print_report(&result.report);
    println!("  Path:        {}", result.export.path.display());
    println!("  Format:      {}", result.export.format);
    println!("  Size:        {} bytes", result.export.size_bytes);
    println!("  SHA-256:     {}", result.export.sha256);
    println!();

    Ok(())
}

fn cmd_check(pipeline: &PipelineConfig) -> Result<()> {
    let report = pipeline::collect(pipeline)?;

    println!();
    println!("  Content OK");
    print_report(&report);
    println!();

    Ok(())
}

fn cmd_list(pipeline: &PipelineConfig, all: bool) -> Result<()> {
    let records = if all {
        pipeline::discover_all(pipeline)?
    } else {
        pipeline::collect(pipeline)?.records
    };

    if records.is_empty() {
        println!("no projects found in {}", pipeline.content_dir.display());
        return Ok(());
    }

    for record in &records {
        let marker = if record.published { ' ' } else { '-' };
        println!(
            "{marker} {:<32} {:<28} {}",
            record.slug, record.title, record.location
        );
    }

    Ok(())
}

fn cmd_show(
    config: &AppConfig,
    pipeline: &PipelineConfig,
    slug: &str,
    from: Option<&Path>,
    use_mock: bool,
) -> Result<()> {
    let records = if use_mock {
        mock::projects()
    } else if let Some(path) = from {
        export::read_artifact(path)?
    } else {
        pipeline::collect(pipeline)?.records
    };

    let catalog = Catalog::with_config(records, config)?;
    info!(records = catalog.len(), slug, "catalog ready");
    let mut page = ProjectPage::new(&catalog);

    match page.open(slug) {
        PageState::Found(record) => print_record(record),
        PageState::NotFound(record) => {
            info!(slug, "project not found");
            print_record(record);
        }
        PageState::Loading => return Err(eyre!("lookup for '{slug}' did not resolve")),
    }

    Ok(())
}

fn cmd_config_init(root: &Path) -> Result<()> {
    let path = init_config(root)?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Output helpers
// ---------------------------------------------------------------------------

fn print_report(report: &PipelineReport) {
    let source = match report.source {
        RecordSource::Content => "content",
        RecordSource::Mock => "built-in samples",
    };
    println!("  Source:      {source}");
    println!("  Discovered:  {}", report.discovered);
    println!("  Unpublished: {}", report.unpublished);
    println!("  Skipped:     {}", report.skipped.len());
    for skipped in &report.skipped {
        println!("    {}: {}", skipped.path.display(), skipped.reason);
    }
    println!("  Published:   {}", report.records.len());
}

fn print_record(record: &ContentRecord) {
    println!();
    println!("  {}, {}", record.title, record.location);
    if record.is_not_found() {
        println!("  slug: {} (placeholder)", record.slug);
    } else {
        println!("  slug: {}", record.slug);
    }
    println!();
    for (i, image) in record.images().iter().enumerate() {
        println!("  [{}] {image}", i + 1);
    }
    println!();
    for line in record.description.lines() {
        println!("  {line}");
    }
    println!();
}
