//! End-to-end build pipeline: directory → discover → filter → export.

use std::collections::HashSet;

use tracing::{info, instrument};

use portfolio_content::{DiscoveryOptions, SkippedFile, discover};
use portfolio_shared::{ContentRecord, PipelineConfig, PortfolioError, Result};

use crate::export::{ExportResult, export};
use crate::mock;

/// Where the published records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Parsed from the content directory.
    Content,
    /// Built-in sample projects (content directory empty or missing).
    Mock,
}

/// Outcome of discovery plus filtering, before anything is written.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Records that parsed, published or not.
    pub discovered: usize,
    /// Records dropped because `published` was false.
    pub unpublished: usize,
    /// Files left out by the skip policy.
    pub skipped: Vec<SkippedFile>,
    /// The published collection, in file-name order.
    pub records: Vec<ContentRecord>,
    /// Origin of `records`.
    pub source: RecordSource,
}

/// Result of a full build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub report: PipelineReport,
    pub export: ExportResult,
}

/// Keep only published records, preserving order.
pub fn filter_published(records: Vec<ContentRecord>) -> Vec<ContentRecord> {
    records.into_iter().filter(|r| r.published).collect()
}

/// Reject a collection in which two records share a slug.
pub fn ensure_unique_slugs(records: &[ContentRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.slug.as_str()) {
            return Err(PortfolioError::validation(format!(
                "duplicate slug '{}'",
                record.slug
            )));
        }
    }
    Ok(())
}

/// Every record in the content directory, published or not.
pub fn discover_all(config: &PipelineConfig) -> Result<Vec<ContentRecord>> {
    Ok(discover(&config.content_dir, &DiscoveryOptions::from(config))?.records)
}

/// Discover, filter, and validate without writing anything.
#[instrument(skip_all, fields(dir = %config.content_dir.display()))]
pub fn collect(config: &PipelineConfig) -> Result<PipelineReport> {
    let discovery = discover(&config.content_dir, &DiscoveryOptions::from(config))?;

    let discovered = discovery.records.len();
    if discovered == 0 && discovery.skipped.is_empty() && config.use_mock_when_empty {
        info!("no content discovered, using built-in sample projects");
        return Ok(PipelineReport {
            discovered,
            unpublished: 0,
            skipped: discovery.skipped,
            records: mock::projects(),
            source: RecordSource::Mock,
        });
    }

    let records = filter_published(discovery.records);
    ensure_unique_slugs(&records)?;

    let unpublished = discovered - records.len();
    info!(
        discovered,
        published = records.len(),
        unpublished,
        "content collected"
    );

    Ok(PipelineReport {
        discovered,
        unpublished,
        skipped: discovery.skipped,
        records,
        source: RecordSource::Content,
    })
}

/// Run the full pipeline and write the export artifact.
#[instrument(skip_all, fields(target = %config.export_path.display()))]
pub fn build(config: &PipelineConfig) -> Result<BuildResult> {
    let report = collect(config)?;
    let export = export(&report.records, &config.export_path, config.export_format)?;
    Ok(BuildResult { report, export })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use portfolio_shared::{AppConfig, ExportFormat, InvalidContentPolicy};

    use super::*;
    use crate::export::read_artifact;

    fn config_for(root: &Path) -> PipelineConfig {
        PipelineConfig::resolve(&AppConfig::default(), root)
    }

    fn write_project(root: &Path, name: &str, content: &str) {
        let dir = root.join("content/projects");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn unpublished_record_is_not_exported() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(
            tmp.path(),
            "x.md",
            "---\ntitle: X\nslug: x\nmainImage: a.jpg\nimage1: b.jpg\npublished: false\n---\n",
        );
        write_project(tmp.path(), "y.md", "---\ntitle: Y\nslug: y\nmainImage: a.jpg\n---\n");

        let result = build(&config_for(tmp.path())).unwrap();
        let exported = read_artifact(&result.export.path).unwrap();

        assert!(exported.iter().all(|r| r.slug != "x"));
        let ys: Vec<_> = exported.iter().filter(|r| r.slug == "y").collect();
        assert_eq!(ys.len(), 1);
        assert_eq!(ys[0].images(), vec!["a.jpg"]);
        assert_eq!(result.report.unpublished, 1);
        assert_eq!(result.report.discovered, 2);
    }

    #[test]
    fn missing_content_directory_exports_empty_collection() {
        let tmp = tempfile::tempdir().unwrap();
        let result = build(&config_for(tmp.path())).unwrap();
        assert_eq!(result.report.source, RecordSource::Content);
        assert_eq!(result.export.record_count, 0);
        let written = std::fs::read_to_string(&result.export.path).unwrap();
        assert_eq!(written, "export default [];\n");
    }

    #[test]
    fn mock_fallback_only_when_nothing_discovered() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config_for(tmp.path());
        config.use_mock_when_empty = true;

        let report = collect(&config).unwrap();
        assert_eq!(report.source, RecordSource::Mock);
        assert_eq!(report.records.len(), mock::projects().len());

        write_project(tmp.path(), "draft.md", "---\npublished: false\n---\n");
        let report = collect(&config).unwrap();
        assert_eq!(report.source, RecordSource::Content);
        assert!(report.records.is_empty());
    }

    #[test]
    fn skipped_files_suppress_mock_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path(), "broken.md", "---\ntitle: [oops\n---\n");
        let mut config = config_for(tmp.path());
        config.use_mock_when_empty = true;
        config.on_invalid = InvalidContentPolicy::Skip;

        let report = collect(&config).unwrap();
        assert_eq!(report.source, RecordSource::Content);
        assert!(report.records.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn duplicate_published_slugs_abort() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path(), "a.md", "---\nslug: same\n---\n");
        write_project(tmp.path(), "b.md", "---\nslug: same\n---\n");
        let err = collect(&config_for(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("duplicate slug 'same'"));
    }

    #[test]
    fn unpublished_duplicate_is_tolerated() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path(), "a.md", "---\nslug: same\n---\n");
        write_project(tmp.path(), "b.md", "---\nslug: same\npublished: false\n---\n");
        let report = collect(&config_for(tmp.path())).unwrap();
        assert_eq!(report.records.len(), 1);
    }

    #[test]
    fn discover_all_includes_drafts() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path(), "a.md", "---\ntitle: A\n---\n");
        write_project(tmp.path(), "b.md", "---\npublished: false\n---\n");
        let all = discover_all(&config_for(tmp.path())).unwrap();
        assert_eq!(all.len(), 2);
        assert!(!all[1].published);
    }

    #[test]
    fn filter_preserves_order() {
        let records = vec![
            ContentRecord::new("a"),
            ContentRecord {
                published: false,
                ..ContentRecord::new("b")
            },
            ContentRecord::new("c"),
        ];
        let kept: Vec<_> = filter_published(records)
            .into_iter()
            .map(|r| r.slug)
            .collect();
        assert_eq!(kept, vec!["a", "c"]);
    }

    #[test]
    fn json_export_format_is_honoured() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path(), "y.md", "---\ntitle: Y\n---\n");
        let mut config = config_for(tmp.path());
        config.export_format = ExportFormat::Json;
        config.export_path = tmp.path().join("out/projects.json");

        let result = build(&config).unwrap();
        let written = std::fs::read_to_string(&result.export.path).unwrap();
        assert!(written.starts_with('['));
    }

    #[test]
    fn fixture_site_builds() {
        let mut config = config_for(Path::new("../../.."));
        config.content_dir = Path::new("../../../fixtures/content/projects").into();

        let report = collect(&config).expect("collect fixtures");
        let slugs: Vec<_> = report.records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["de-poorten", "visserijmuseum"]);
        assert_eq!(report.unpublished, 1);
    }
}
