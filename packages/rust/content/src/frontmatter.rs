//! Front matter splitting and decoding.
//!
//! A content file looks like:
//!
//! ```text
//! ---
//! title: De Poorten
//! mainImage: /images/poorten.jpg
//! ---
//! Free-text body.
//! ```
//!
//! The block between the `---` fences is YAML. Everything after the closing
//! fence is the body. A file without an opening fence has no metadata.

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_yaml::Value;

use portfolio_shared::{PortfolioError, Result};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A content file split into decoded metadata and its free-text body.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Decoded metadata block.
    pub front_matter: FrontMatter,
    /// Text after the closing fence, untrimmed.
    pub body: String,
}

/// Recognized metadata fields. Unknown keys are ignored.
///
/// Text fields are `None` when absent, null, or an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub main_image: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub image1: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub image2: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub image3: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub image4: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub image5: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    /// Only a literal boolean `false` unpublishes.
    #[serde(default = "published_by_default", deserialize_with = "published_flag")]
    pub published: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            slug: None,
            location: None,
            main_image: None,
            image1: None,
            image2: None,
            image3: None,
            image4: None,
            image5: None,
            description: None,
            published: true,
        }
    }
}

fn published_by_default() -> bool {
    true
}

fn published_flag<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<bool, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(!matches!(value, Value::Bool(false)))
}

fn scalar_text<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<String>, D::Error> {
    let value = Value::deserialize(d)?;
    value_to_text(value).map_err(D::Error::custom)
}

fn value_to_text(value: Value) -> std::result::Result<Option<String>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Tagged(tagged) => value_to_text(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err("expected a text value, found a list or mapping")
        }
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse a content file into metadata and body.
///
/// Errors carry an empty path; callers attach the file via
/// [`PortfolioError::at_path`].
pub fn parse_document(text: &str) -> Result<Document> {
    let (yaml, body) = split_front_matter(text)?;

    let front_matter = match yaml {
        Some(yaml) => decode_front_matter(yaml)?,
        None => FrontMatter::default(),
    };

    Ok(Document {
        front_matter,
        body: body.to_string(),
    })
}

/// Split off the fenced metadata block. Returns `(yaml, body)`.
fn split_front_matter(text: &str) -> Result<(Option<&str>, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok((None, text));
    };
    if first.trim_end() != "---" {
        return Ok((None, text));
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        let fence = line.trim_end();
        if fence == "---" || fence == "..." {
            return Ok((Some(&text[start..offset]), &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(PortfolioError::parse(
        "",
        "front matter opened with '---' but never closed",
    ))
}

fn decode_front_matter(yaml: &str) -> Result<FrontMatter> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let value: Value = serde_yaml::from_str(yaml)
        .map_err(|e| PortfolioError::parse("", format!("invalid YAML front matter: {e}")))?;

    match value {
        Value::Null => Ok(FrontMatter::default()),
        mapping @ Value::Mapping(_) => serde_yaml::from_value(mapping)
            .map_err(|e| PortfolioError::parse("", format!("invalid front matter field: {e}"))),
        _ => Err(PortfolioError::parse(
            "",
            "front matter must be a key/value mapping",
        )),
    }
}
