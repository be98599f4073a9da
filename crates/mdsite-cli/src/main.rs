//! mdsite: CLI tool to generate a static HTML site from markdown

mod config;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};

use config::{CONFIG_FILE_NAME, Config, SCHEMA_PATH, SiteConfig};
use mdsite_core::{markdown_to_element, markdown_to_html};
use mdsite_site::{SiteOptions, copy_static, generate_page, generate_pages};

#[derive(Parser, Debug)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from markdown")]
#[command(version)]
#[command(after_help = "Examples:
  mdsite build                         # content/ + static/ + template.html -> public/
  mdsite build --output docs -j4       # Build into docs/ with 4 parallel jobs
  mdsite convert page.md               # Print the HTML fragment for one file
  mdsite convert page.md --json        # Print the element tree as JSON
  mdsite init                          # Write a sample _mdsite.toml and its schema
  mdsite init --schema > schema.json   # Print the config schema")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode - only show errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy static assets and generate a page for every markdown file
    Build(BuildArgs),
    /// Convert a single markdown file
    Convert(ConvertArgs),
    /// Write a sample configuration file and its JSON schema
    Init(InitArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Directory of markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// URL prefix for root-relative links
    #[arg(long)]
    base_path: Option<String>,

    /// Number of parallel jobs (defaults to number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Configuration file (defaults to ./_mdsite.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input markdown file
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render into this HTML template instead of emitting a fragment
    #[arg(long)]
    template: Option<PathBuf>,

    /// Emit the element tree as JSON
    #[arg(long, conflicts_with = "template")]
    json: bool,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Where to write the configuration file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    output: PathBuf,

    /// Print the JSON schema of the configuration file instead
    #[arg(long)]
    schema: bool,
}

/// Settings for a build after merging flags, config file and defaults
#[derive(Debug)]
struct BuildSettings {
    content_dir: PathBuf,
    static_dir: PathBuf,
    template: PathBuf,
    options: SiteOptions,
}

impl BuildSettings {
    /// Flags win over the config file, which wins over defaults
    fn resolve(args: BuildArgs, site: SiteConfig) -> Self {
        let defaults = SiteOptions::default();
        Self {
            content_dir: args
                .content
                .or(site.content_dir)
                .unwrap_or_else(|| PathBuf::from("content")),
            static_dir: args
                .static_dir
                .or(site.static_dir)
                .unwrap_or_else(|| PathBuf::from("static")),
            template: args
                .template
                .or(site.template)
                .unwrap_or_else(|| PathBuf::from("template.html")),
            options: SiteOptions {
                output_dir: args.output.or(site.output_dir).unwrap_or(defaults.output_dir),
                base_path: args.base_path.or(site.base_path).unwrap_or(defaults.base_path),
                parallel_jobs: args.jobs.or(site.jobs),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Build(args) => run_build(args, cli.quiet),
        Command::Convert(args) => run_convert(args, cli.quiet),
        Command::Init(args) => run_init(args, cli.quiet),
    }
}

/// Install the logger; `RUST_LOG` overrides the flag-derived level
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build the whole site
fn run_build(args: BuildArgs, quiet: bool) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir(Path::new("."))?.unwrap_or_default(),
    };
    let settings = BuildSettings::resolve(args, config.site);
    log::debug!("build settings: {:?}", settings);

    let output_dir = &settings.options.output_dir;
    if settings.static_dir.is_dir() {
        let copied = copy_static(&settings.static_dir, output_dir).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                settings.static_dir.display(),
                output_dir.display()
            )
        })?;
        log::info!("copied {} static files", copied);
    } else {
        log::warn!(
            "static directory {} not found, skipping",
            settings.static_dir.display()
        );
    }

    let result = generate_pages(&settings.content_dir, &settings.template, &settings.options)
        .with_context(|| {
            format!(
                "Failed to generate pages from {}",
                settings.content_dir.display()
            )
        })?;

    let mut output_files = result.output_files;
    output_files.sort();
    if !quiet {
        for file in &output_files {
            println!("{}", file.display());
        }
    }

    // Report errors
    for (file, e) in &result.failed_files {
        eprintln!("Error generating {}: {}", file.display(), e);
    }

    let failed_count = result.failed_files.len();
    if !quiet {
        eprintln!(
            "Generated {} pages, {} failed",
            result.success_count, failed_count
        );
    }

    if failed_count > 0 {
        anyhow::bail!("{} pages failed to generate", failed_count);
    }

    Ok(())
}

/// Convert one markdown file to a fragment, a full page, or a JSON tree
fn run_convert(args: ConvertArgs, quiet: bool) -> Result<()> {
    let markdown = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;

    let rendered = if args.json {
        let root = markdown_to_element(&markdown);
        serde_json::to_string_pretty(&root).context("Failed to serialize element tree")?
    } else if let Some(template_path) = &args.template {
        let template = fs::read_to_string(template_path)
            .with_context(|| format!("Failed to read template: {}", template_path.display()))?;
        generate_page(&markdown, &template, "/")
            .with_context(|| format!("Failed to convert: {}", args.input.display()))?
    } else {
        markdown_to_html(&markdown)
            .with_context(|| format!("Failed to convert: {}", args.input.display()))?
    };

    match &args.output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(output_path, &rendered)
                .with_context(|| format!("Failed to write: {}", output_path.display()))?;
            if !quiet {
                println!("{}", output_path.display());
            }
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Write a sample config with the schema its `#:schema` line points at,
/// or print the config schema
fn run_init(args: InitArgs, quiet: bool) -> Result<()> {
    let schema = Config::json_schema_string()?;
    if args.schema {
        println!("{}", schema);
        return Ok(());
    }

    if args.output.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {}", args.output.display());
    }

    let content = Config::sample().to_toml_with_schema()?;
    fs::write(&args.output, content)
        .with_context(|| format!("Failed to write: {}", args.output.display()))?;

    // An existing schema file is overwritten
    let schema_path = args
        .output
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(SCHEMA_PATH);
    fs::write(&schema_path, schema)
        .with_context(|| format!("Failed to write: {}", schema_path.display()))?;

    if !quiet {
        println!("{}", args.output.display());
        println!("{}", schema_path.display());
    }

    Ok(())
}
