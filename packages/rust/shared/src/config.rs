//! Project configuration for the portfolio pipeline.
//!
//! Config lives in `portfolio.toml` at the project root.
//! CLI flags override config file values, which override defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};
use crate::types::{ContentRecord, NOT_FOUND_SLUG};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "portfolio.toml";

// ---------------------------------------------------------------------------
// Config structs (matching portfolio.toml schema)
// ---------------------------------------------------------------------------

/// Top-level project config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where content files are discovered.
    #[serde(default)]
    pub content: ContentConfig,

    /// Where and how the generated artifact is written.
    #[serde(default)]
    pub export: ExportConfig,

    /// Placeholder shown for unknown slugs.
    #[serde(default)]
    pub not_found: NotFoundConfig,

    /// Runtime catalog behaviour.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// `[content]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content directory, relative to the project root.
    #[serde(default = "default_content_dir")]
    pub dir: String,

    /// Recognized file extensions (without the dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// What to do with a file whose front matter cannot be parsed.
    #[serde(default)]
    pub on_invalid: InvalidContentPolicy,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            extensions: default_extensions(),
            on_invalid: InvalidContentPolicy::default(),
        }
    }
}

fn default_content_dir() -> String {
    "content/projects".into()
}
fn default_extensions() -> Vec<String> {
    vec!["md".into()]
}

/// `[export]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output artifact path, relative to the project root.
    #[serde(default = "default_export_path")]
    pub path: String,

    /// Artifact format.
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
            format: ExportFormat::default(),
        }
    }
}

fn default_export_path() -> String {
    "src/generated/projects.js".into()
}

/// `[not_found]` section. The slug is fixed to `not-found`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundConfig {
    #[serde(default = "default_not_found_title")]
    pub title: String,
    #[serde(default = "default_not_found_location")]
    pub location: String,
    #[serde(default = "default_not_found_image")]
    pub main_image: String,
    #[serde(default = "default_not_found_description")]
    pub description: String,
}

impl Default for NotFoundConfig {
    fn default() -> Self {
        Self {
            title: default_not_found_title(),
            location: default_not_found_location(),
            main_image: default_not_found_image(),
            description: default_not_found_description(),
        }
    }
}

fn default_not_found_title() -> String {
    "Project niet gevonden".into()
}
fn default_not_found_location() -> String {
    "Onbekend".into()
}
fn default_not_found_image() -> String {
    "https://via.placeholder.com/1080x720".into()
}
fn default_not_found_description() -> String {
    "Het project dat u zoekt is niet beschikbaar.".into()
}

impl NotFoundConfig {
    /// Build the sentinel record returned for unknown slugs.
    pub fn to_record(&self) -> ContentRecord {
        ContentRecord {
            title: self.title.clone(),
            location: self.location.clone(),
            main_image: self.main_image.clone(),
            description: self.description.clone(),
            ..ContentRecord::new(NOT_FOUND_SLUG)
        }
    }
}

/// `[catalog]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Serve the built-in mock projects when discovery yields nothing.
    #[serde(default)]
    pub use_mock_when_empty: bool,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Handling of content files that fail to parse or validate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidContentPolicy {
    /// Fail the whole run on the first bad file.
    #[default]
    Abort,
    /// Log a warning and leave the file out.
    Skip,
}

impl FromStr for InvalidContentPolicy {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(PortfolioError::config(format!(
                "unknown invalid-content policy '{other}': expected 'abort' or 'skip'"
            ))),
        }
    }
}

/// Shape of the generated artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// ES module: `export default [...];`
    #[default]
    Module,
    /// Plain JSON array.
    Json,
}

impl FromStr for ExportFormat {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "module" | "js" => Ok(Self::Module),
            "json" => Ok(Self::Json),
            other => Err(PortfolioError::config(format!(
                "unknown export format '{other}': expected 'module' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => f.write_str("module"),
            Self::Json => f.write_str("json"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime pipeline configuration with paths resolved against the project root.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Absolute (or root-joined) content directory.
    pub content_dir: PathBuf,
    /// Recognized extensions, lowercased, without dots.
    pub extensions: Vec<String>,
    /// Bad-file policy.
    pub on_invalid: InvalidContentPolicy,
    /// Target artifact path.
    pub export_path: PathBuf,
    /// Target artifact format.
    pub export_format: ExportFormat,
    /// Fall back to the mock dataset when nothing is discovered.
    pub use_mock_when_empty: bool,
}

impl PipelineConfig {
    /// Resolve an [`AppConfig`] against a project root.
    pub fn resolve(config: &AppConfig, root: &Path) -> Self {
        Self {
            content_dir: root.join(&config.content.dir),
            extensions: config
                .content
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            on_invalid: config.content.on_invalid,
            export_path: root.join(&config.export.path),
            export_format: config.export.format,
            use_mock_when_empty: config.catalog.use_mock_when_empty,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Path of the config file for a project root.
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Load the project config. Returns defaults if the file does not exist.
pub fn load_config(root: &Path) -> Result<AppConfig> {
    let path = config_file_path(root);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the project config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| PortfolioError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| PortfolioError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Write a default `portfolio.toml` into the project root.
/// Returns the path to the created file. Never overwrites an existing file.
pub fn init_config(root: &Path) -> Result<PathBuf> {
    let path = config_file_path(root);
    if path.exists() {
        return Err(PortfolioError::config(format!(
            "{} already exists",
            path.display()
        )));
    }

    std::fs::create_dir_all(root).map_err(|e| PortfolioError::io(root, e))?;

    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| PortfolioError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| PortfolioError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
