//! Core domain types for portfolio content.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Slug carried by the placeholder record returned for unknown lookups.
pub const NOT_FOUND_SLUG: &str = "not-found";

/// Number of supplementary image slots (`image1` .. `image5`).
pub const SUPPLEMENTARY_IMAGE_SLOTS: usize = 5;

/// URL-safe slug: unreserved URI characters, not starting with punctuation.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._~-]*$").expect("slug regex"));

// ---------------------------------------------------------------------------
// ContentRecord
// ---------------------------------------------------------------------------

/// One displayable project, normalized from a content file or the mock set.
///
/// Serialized with camelCase keys so the generated module matches what the
/// page component imports. Unset `imageN` slots are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Unique, URL-safe identifier.
    pub slug: String,
    /// Free-text location, e.g. `Stam, Gent`.
    #[serde(default)]
    pub location: String,
    /// Lead image URL or path.
    #[serde(default)]
    pub main_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image5: Option<String>,
    /// Free text; may contain embedded line breaks.
    #[serde(default)]
    pub description: String,
    /// Whether the record ends up in the exported collection.
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl ContentRecord {
    /// Create a published record with only a slug set.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            slug: slug.into(),
            location: String::new(),
            main_image: String::new(),
            image1: None,
            image2: None,
            image3: None,
            image4: None,
            image5: None,
            description: String::new(),
            published: true,
        }
    }

    /// The supplementary image slots in declaration order.
    pub fn supplementary_slots(&self) -> [Option<&str>; SUPPLEMENTARY_IMAGE_SLOTS] {
        [
            self.image1.as_deref(),
            self.image2.as_deref(),
            self.image3.as_deref(),
            self.image4.as_deref(),
            self.image5.as_deref(),
        ]
    }

    /// Fill the supplementary slots from a list, in order.
    ///
    /// Entries past the fifth are dropped; empty strings leave the slot unset.
    pub fn with_supplementary_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut slots = images
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .take(SUPPLEMENTARY_IMAGE_SLOTS);
        self.image1 = slots.next();
        self.image2 = slots.next();
        self.image3 = slots.next();
        self.image4 = slots.next();
        self.image5 = slots.next();
        self
    }

    /// Ordered image list for the gallery: `mainImage` then every set slot.
    pub fn images(&self) -> Vec<&str> {
        std::iter::once(self.main_image.as_str())
            .chain(self.supplementary_slots().into_iter().flatten())
            .collect()
    }

    /// Whether this is the placeholder returned for unknown slugs.
    pub fn is_not_found(&self) -> bool {
        self.slug == NOT_FOUND_SLUG
    }
}

/// Check that a slug is non-empty and URL-safe.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(PortfolioError::validation("slug must not be empty"));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(PortfolioError::validation(format!(
            "slug '{slug}' is not URL-safe (allowed: letters, digits, '-', '.', '_', '~')"
        )));
    }
    if slug == NOT_FOUND_SLUG {
        return Err(PortfolioError::validation(format!(
            "slug '{NOT_FOUND_SLUG}' is reserved for the placeholder record"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ContentRecord {
        ContentRecord {
            title: "De Poorten".into(),
            main_image: "a.jpg".into(),
            location: "Stam, Gent".into(),
            ..ContentRecord::new("de-poorten")
        }
    }

    #[test]
    fn images_start_with_main_image() {
        assert_eq!(record().images(), vec!["a.jpg"]);
    }

    #[test]
    fn images_skip_unset_slots_without_gaps() {
        let r = ContentRecord {
            image2: Some("c.jpg".into()),
            image5: Some("f.jpg".into()),
            ..record()
        };
        assert_eq!(r.images(), vec!["a.jpg", "c.jpg", "f.jpg"]);
    }

    #[test]
    fn supplementary_images_fill_in_order() {
        let r = record().with_supplementary_images(["b.jpg", "", "c.jpg", "d", "e", "f", "g"]);
        assert_eq!(r.image1.as_deref(), Some("b.jpg"));
        assert_eq!(r.image2.as_deref(), Some("c.jpg"));
        assert_eq!(r.image5.as_deref(), Some("f"));
        assert_eq!(r.images().len(), 6);
    }

    #[test]
    fn serializes_camel_case_and_omits_unset_images() {
        let r = ContentRecord {
            image1: Some("b.jpg".into()),
            ..record()
        };
        let json = serde_json::to_value(&r).expect("serialize");
        assert_eq!(json["mainImage"], "a.jpg");
        assert_eq!(json["image1"], "b.jpg");
        assert!(json.get("image2").is_none());
        assert_eq!(json["published"], true);
    }

    #[test]
    fn deserialize_defaults_missing_fields() {
        let r: ContentRecord = serde_json::from_str(r#"{"slug":"y"}"#).expect("deserialize");
        assert_eq!(r.slug, "y");
        assert_eq!(r.title, "");
        assert!(r.published);
        assert_eq!(r.images(), vec![""]);
    }

    #[test]
    fn slug_validation() {
        assert!(validate_slug("mas-antwerpen").is_ok());
        assert!(validate_slug("project_2024.v2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("nested/path").is_err());
        assert!(validate_slug("-leading").is_err());
    }

    #[test]
    fn reserved_slug_is_rejected() {
        let err = validate_slug(NOT_FOUND_SLUG).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn not_found_detection() {
        assert!(ContentRecord::new(NOT_FOUND_SLUG).is_not_found());
        assert!(!record().is_not_found());
    }
}
