//! Content discovery: scan a directory of markdown files and normalize their
//! front matter into [`ContentRecord`]s.
//!
//! The scan is flat (no recursion), ordered by file name, and treats a
//! missing directory as empty. Files that fail to parse either abort the
//! scan or are skipped with a warning, depending on
//! [`InvalidContentPolicy`].

mod frontmatter;

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use portfolio_shared::{
    ContentRecord, InvalidContentPolicy, PipelineConfig, PortfolioError, Result, validate_slug,
};

pub use frontmatter::{Document, FrontMatter, parse_document};

// ---------------------------------------------------------------------------
// Options and results
// ---------------------------------------------------------------------------

/// Configuration for a discovery pass.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Recognized extensions, lowercase, without the dot.
    pub extensions: Vec<String>,
    /// Bad-file handling.
    pub on_invalid: InvalidContentPolicy,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["md".into()],
            on_invalid: InvalidContentPolicy::Abort,
        }
    }
}

impl From<&PipelineConfig> for DiscoveryOptions {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            on_invalid: config.on_invalid,
        }
    }
}

/// A file left out under [`InvalidContentPolicy::Skip`].
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a discovery pass.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Every record that parsed, published or not, in file-name order.
    pub records: Vec<ContentRecord>,
    /// Files dropped by the skip policy.
    pub skipped: Vec<SkippedFile>,
}

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

/// Discover and parse every content file directly inside `dir`.
///
/// A missing directory yields an empty [`Discovery`]. A path that exists but
/// is not a directory is an error.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn discover(dir: &Path, opts: &DiscoveryOptions) -> Result<Discovery> {
    let files = list_content_files(dir, &opts.extensions)?;

    let mut discovery = Discovery::default();
    for path in files {
        match load_record(&path) {
            Ok(record) => {
                debug!(
                    path = %path.display(),
                    slug = %record.slug,
                    published = record.published,
                    "parsed content file"
                );
                discovery.records.push(record);
            }
            Err(e) if is_content_error(&e) && opts.on_invalid == InvalidContentPolicy::Skip => {
                warn!(path = %path.display(), error = %e, "skipping invalid content file");
                discovery.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        records = discovery.records.len(),
        skipped = discovery.skipped.len(),
        "content discovery complete"
    );

    Ok(discovery)
}

/// Read and normalize a single content file.
pub fn load_record(path: &Path) -> Result<ContentRecord> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => PortfolioError::parse(path, "file is not valid UTF-8"),
        _ => PortfolioError::io(path, e),
    })?;

    let document = parse_document(&text).map_err(|e| e.at_path(path))?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = normalize(&stem, document);
    validate_slug(&record.slug).map_err(|e| {
        PortfolioError::validation(format!("{}: {e}", path.display()))
    })?;

    Ok(record)
}

/// Turn a parsed document into a record, applying field defaults.
///
/// `slug` falls back to `stem`; `description` falls back to the trimmed body.
pub fn normalize(stem: &str, document: Document) -> ContentRecord {
    let fm = document.front_matter;

    let description = match fm.description {
        Some(explicit) => explicit,
        None => document.body.trim().to_string(),
    };

    ContentRecord {
        title: fm.title.unwrap_or_default(),
        slug: fm.slug.unwrap_or_else(|| stem.to_string()),
        location: fm.location.unwrap_or_default(),
        main_image: fm.main_image.unwrap_or_default(),
        image1: fm.image1,
        image2: fm.image2,
        image3: fm.image3,
        image4: fm.image4,
        image5: fm.image5,
        description,
        published: fm.published,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// List matching files directly inside `dir`, sorted by file name.
fn list_content_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    match std::fs::metadata(dir) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(dir = %dir.display(), "content directory not found, no records");
            return Ok(Vec::new());
        }
        Err(e) => return Err(PortfolioError::io(dir, e)),
        Ok(meta) if !meta.is_dir() => {
            return Err(PortfolioError::io(
                dir,
                std::io::Error::other("content path is not a directory"),
            ));
        }
        Ok(_) => {}
    }

    let entries = std::fs::read_dir(dir).map_err(|e| PortfolioError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PortfolioError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(count = files.len(), "content files found");
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Errors caused by the file's content rather than the filesystem.
fn is_content_error(e: &PortfolioError) -> bool {
    matches!(
        e,
        PortfolioError::Parse { .. } | PortfolioError::Validation { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &str = "../../../fixtures/content/projects";

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).expect("write fixture file");
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let found = discover(&tmp.path().join("nope"), &DiscoveryOptions::default()).unwrap();
        assert!(found.records.is_empty());
        assert!(found.skipped.is_empty());
    }

    #[test]
    fn file_instead_of_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "plain.md", "x");
        let err = discover(&tmp.path().join("plain.md"), &DiscoveryOptions::default()).unwrap_err();
        assert!(matches!(err, PortfolioError::Io { .. }));
    }

    #[test]
    fn scan_is_flat_sorted_and_extension_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "b.md", "---\ntitle: B\n---\n");
        write(tmp.path(), "a.MD", "---\ntitle: A\n---\n");
        write(tmp.path(), "notes.txt", "---\ntitle: N\n---\n");
        std::fs::create_dir(tmp.path().join("nested")).unwrap();
        write(&tmp.path().join("nested"), "c.md", "---\ntitle: C\n---\n");

        let found = discover(tmp.path(), &DiscoveryOptions::default()).unwrap();
        let slugs: Vec<_> = found.records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn slug_falls_back_to_file_stem() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "visserijmuseum.md", "---\ntitle: Visserijmuseum\n---\n");
        let found = discover(tmp.path(), &DiscoveryOptions::default()).unwrap();
        assert_eq!(found.records[0].slug, "visserijmuseum");
    }

    #[test]
    fn explicit_description_wins_over_body() {
        let doc = parse_document("---\ndescription: From metadata\n---\nFrom body\n").unwrap();
        let record = normalize("x", doc);
        assert_eq!(record.description, "From metadata");

        let doc = parse_document("---\ntitle: T\n---\n\n  From body\nline two\n\n").unwrap();
        let record = normalize("x", doc);
        assert_eq!(record.description, "From body\nline two");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let record = normalize("bare", Document::default());
        assert_eq!(record.title, "");
        assert_eq!(record.location, "");
        assert_eq!(record.main_image, "");
        assert_eq!(record.description, "");
        assert_eq!(record.slug, "bare");
        assert!(record.published);
        assert!(record.image1.is_none());
    }

    #[test]
    fn abort_policy_names_the_bad_file() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "good.md", "---\ntitle: ok\n---\n");
        write(tmp.path(), "broken.md", "---\ntitle: [oops\n---\n");

        let err = discover(tmp.path(), &DiscoveryOptions::default()).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn skip_policy_keeps_going() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "good.md", "---\ntitle: ok\n---\n");
        write(tmp.path(), "broken.md", "---\ntitle: ok\n");
        write(tmp.path(), "bad-slug.md", "---\nslug: has space\n---\n");

        let opts = DiscoveryOptions {
            on_invalid: InvalidContentPolicy::Skip,
            ..DiscoveryOptions::default()
        };
        let found = discover(tmp.path(), &opts).unwrap();
        assert_eq!(found.records.len(), 1);
        assert_eq!(found.records[0].slug, "good");
        assert_eq!(found.skipped.len(), 2);
    }

    #[test]
    fn invalid_slug_aborts_by_default() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "x.md", "---\nslug: a/b\n---\n");
        let err = discover(tmp.path(), &DiscoveryOptions::default()).unwrap_err();
        assert!(matches!(err, PortfolioError::Validation { .. }));
        assert!(err.to_string().contains("x.md"));
    }

    #[test]
    fn reserved_slug_in_content_aborts() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "real.md", "---\nslug: not-found\ntitle: real\n---\n");
        let err = discover(tmp.path(), &DiscoveryOptions::default()).unwrap_err();
        assert!(matches!(err, PortfolioError::Validation { .. }));
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn non_utf8_file_is_a_content_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("latin1.md"), [0x2d, 0x2d, 0x2d, 0x0a, 0xff, 0xfe]).unwrap();
        let err = discover(tmp.path(), &DiscoveryOptions::default()).unwrap_err();
        assert!(matches!(err, PortfolioError::Parse { .. }));
    }

    #[test]
    fn discover_fixture_directory() {
        let found = discover(Path::new(FIXTURES), &DiscoveryOptions::default())
            .expect("discover fixtures");

        let slugs: Vec<_> = found.records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["aquarium-blankenberge", "de-poorten", "visserijmuseum"]);

        let poorten = &found.records[1];
        assert_eq!(poorten.title, "De Poorten");
        assert_eq!(poorten.location, "Stam, Gent");
        assert_eq!(poorten.images().len(), 3);
        assert!(poorten.description.contains('\n'));

        let aquarium = &found.records[0];
        assert!(!aquarium.published);

        let museum = &found.records[2];
        assert_eq!(museum.description, "Een modern museum gewijd aan de rijke visserijtraditie van de Belgische kust.");
    }
}
