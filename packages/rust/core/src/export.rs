//! Export artifact writer and reader.
//!
//! Serializes the published records into the static data file the site
//! imports at start-up, either as an ES module or as plain JSON.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use portfolio_shared::{ContentRecord, ExportFormat, PortfolioError, Result};

/// Prefix of the generated ES module.
const MODULE_PREFIX: &str = "export default ";

/// Metadata about a written artifact.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Where the artifact was written.
    pub path: PathBuf,
    /// Format used.
    pub format: ExportFormat,
    /// Number of records in the artifact.
    pub record_count: usize,
    /// Artifact size in bytes.
    pub size_bytes: usize,
    /// SHA-256 of the artifact contents, lowercase hex.
    pub sha256: String,
}

/// Render records into artifact text.
///
/// The JSON body is pretty-printed with two-space indentation. Module output
/// is `export default [...];` so the site can `import projects from ...`.
pub fn render(records: &[ContentRecord], format: ExportFormat) -> Result<String> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| PortfolioError::Serialization(format!("JSON serialization failed: {e}")))?;

    Ok(match format {
        ExportFormat::Module => format!("{MODULE_PREFIX}{json};\n"),
        ExportFormat::Json => format!("{json}\n"),
    })
}

/// Write the artifact atomically (temp file, then rename).
///
/// Parent directories are created as needed.
#[instrument(skip_all, fields(path = %target.display(), records = records.len(), format = %format))]
pub fn export(records: &[ContentRecord], target: &Path, format: ExportFormat) -> Result<ExportResult> {
    let content = render(records, format)?;

    let file_name = target
        .file_name()
        .ok_or_else(|| PortfolioError::config(format!("export path {} has no file name", target.display())))?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PortfolioError::io(parent, e))?;
    }

    let temp = target.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));
    std::fs::write(&temp, &content).map_err(|e| PortfolioError::io(&temp, e))?;
    std::fs::rename(&temp, target).map_err(|e| PortfolioError::io(target, e))?;

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let sha256 = format!("{:x}", hasher.finalize());

    debug!(size = content.len(), "wrote artifact");
    info!(records = records.len(), path = %target.display(), "export complete");

    Ok(ExportResult {
        path: target.to_path_buf(),
        format,
        record_count: records.len(),
        size_bytes: content.len(),
        sha256,
    })
}

/// Read a previously exported artifact back into records.
pub fn read_artifact(path: &Path) -> Result<Vec<ContentRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| PortfolioError::io(path, e))?;
    parse_artifact(&content)
        .map_err(|e| PortfolioError::Serialization(format!("{}: {e}", path.display())))
}

/// Parse artifact text in either format.
pub fn parse_artifact(content: &str) -> Result<Vec<ContentRecord>> {
    let trimmed = content.trim();
    let json = match trimmed.strip_prefix(MODULE_PREFIX) {
        Some(rest) => rest.strip_suffix(';').unwrap_or(rest).trim_end(),
        None => trimmed,
    };

    serde_json::from_str(json)
        .map_err(|e| PortfolioError::Serialization(format!("invalid artifact: {e}")))
}
