//! Read-only project catalog consumed by the site.
//!
//! Built once at start-up from the published collection and passed by
//! reference. Lookups never fail: unknown slugs resolve to the configured
//! not-found record.

use std::collections::HashMap;

use tracing::debug;

use portfolio_shared::{AppConfig, ContentRecord, NOT_FOUND_SLUG, PortfolioError, Result};

use crate::pipeline::ensure_unique_slugs;

/// Immutable slug-indexed view over the published records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ContentRecord>,
    index: HashMap<String, usize>,
    not_found: ContentRecord,
}

impl Catalog {
    /// Build a catalog. Unpublished records are dropped; duplicate slugs and
    /// records claiming the placeholder slug are rejected.
    pub fn new(records: Vec<ContentRecord>, not_found: ContentRecord) -> Result<Self> {
        let records: Vec<_> = records.into_iter().filter(|r| r.published).collect();
        ensure_unique_slugs(&records)?;
        if records.iter().any(ContentRecord::is_not_found) {
            return Err(PortfolioError::validation(format!(
                "slug '{NOT_FOUND_SLUG}' is reserved for the placeholder record"
            )));
        }

        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.slug.clone(), i))
            .collect();

        debug!(records = records.len(), "catalog built");
        Ok(Self {
            records,
            index,
            not_found,
        })
    }

    /// Build a catalog using the sentinel text from `[not_found]`.
    pub fn with_config(records: Vec<ContentRecord>, config: &AppConfig) -> Result<Self> {
        Self::new(records, config.not_found.to_record())
    }

    /// Look up a record, falling back to the not-found record.
    pub fn get_by_slug(&self, slug: &str) -> &ContentRecord {
        self.find(slug).unwrap_or(&self.not_found)
    }

    /// Look up a record by slug.
    pub fn find(&self, slug: &str) -> Option<&ContentRecord> {
        self.index.get(slug).map(|&i| &self.records[i])
    }

    /// The record returned for unknown slugs.
    pub fn not_found(&self) -> &ContentRecord {
        &self.not_found
    }

    /// All records, in export order.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
