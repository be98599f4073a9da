//! mdsite-site: Site-level operations for markdown to HTML generation
//!
//! This crate provides functionality for turning a directory tree of markdown
//! files into a static site, including:
//! - Mirroring a static asset directory into the output directory
//! - Rendering each page into an HTML template
//! - Batch generation with parallel processing
//!
//! This crate is designed to be used by various interfaces (CLI, build scripts, etc.)

pub mod page;
pub mod static_files;

pub use page::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, apply_base_path, generate_page};
pub use static_files::copy_static;

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur during site operations
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to generate {file}: {source}")]
    Page {
        file: PathBuf,
        #[source]
        source: mdsite_core::Error,
    },

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),
}

/// Result type for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Options for page generation
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Output directory for generated pages
    pub output_dir: PathBuf,
    /// URL prefix for root-relative links (`/` leaves links untouched)
    pub base_path: String,
    /// Number of parallel jobs (None = use all CPUs)
    pub parallel_jobs: Option<usize>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
            parallel_jobs: None,
        }
    }
}

/// Result of generating a directory of pages
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Number of successfully generated pages
    pub success_count: usize,
    /// Source files that failed, with their errors
    pub failed_files: Vec<(PathBuf, String)>,
    /// Pages that were written
    pub output_files: Vec<PathBuf>,
}

/// Outcome of generating a single page
enum PageOutcome {
    /// Page written, contains output path
    Success(PathBuf),
    /// Failed, contains input path and error message
    Failed(PathBuf, String),
}

/// Generate an HTML page for every markdown file under `content_dir`
///
/// The directory structure is mirrored into `options.output_dir`, with each
/// `.md` file written as `.html`. A page that fails (for instance because
/// it has no `# ` title) is reported in the result and does not stop the
/// others.
pub fn generate_pages(
    content_dir: &Path,
    template_path: &Path,
    options: &SiteOptions,
) -> Result<GenerateResult> {
    if !content_dir.is_dir() {
        return Err(SiteError::DirectoryNotFound(content_dir.to_path_buf()));
    }
    if !template_path.is_file() {
        return Err(SiteError::TemplateNotFound(template_path.to_path_buf()));
    }
    let template = fs::read_to_string(template_path)?;

    let mut files = collect_markdown_files(content_dir)?;
    files.sort();
    log::info!(
        "generating {} pages from {}",
        files.len(),
        content_dir.display()
    );

    // Configure thread pool if specified
    if let Some(n) = options.parallel_jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok();
    }

    fs::create_dir_all(&options.output_dir)?;

    let outcomes: Vec<_> = files
        .par_iter()
        .map(|file| generate_single_page(file, content_dir, &template, options))
        .collect();

    let mut result = GenerateResult::default();
    for outcome in outcomes {
        match outcome {
            PageOutcome::Success(output_path) => {
                result.success_count += 1;
                result.output_files.push(output_path);
            }
            PageOutcome::Failed(path, error) => {
                log::warn!("failed to generate {}: {}", path.display(), error);
                result.failed_files.push((path, error));
            }
        }
    }

    Ok(result)
}

/// Generate one page and write it below the output directory
fn generate_single_page(
    input: &Path,
    content_dir: &Path,
    template: &str,
    options: &SiteOptions,
) -> PageOutcome {
    let generate = || -> Result<PathBuf> {
        let markdown = fs::read_to_string(input)?;
        let html = generate_page(&markdown, template, &options.base_path).map_err(|source| {
            SiteError::Page {
                file: input.to_path_buf(),
                source,
            }
        })?;

        let relative = input.strip_prefix(content_dir).unwrap_or(input);
        let output_path = options.output_dir.join(relative).with_extension("html");

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        log::debug!("wrote {}", output_path.display());

        Ok(output_path)
    };

    match generate() {
        Ok(path) => PageOutcome::Success(path),
        Err(e) => PageOutcome::Failed(input.to_path_buf(), e.to_string()),
    }
}

/// Collect all .md files in a directory tree
fn collect_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension()
                && ext.eq_ignore_ascii_case("md")
            {
                files.push(path);
            }
        } else if path.is_dir() {
            files.extend(collect_markdown_files(&path)?);
        }
    }

    Ok(files)
}
