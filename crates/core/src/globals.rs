//! CMS global documents: slugs, cache keys, and schema dispatch.
//!
//! A global is a singleton document (`landing`, `seo`) stored as JSON. This
//! module maps a slug to its typed schema so writes can be validated and
//! never-saved globals can be served with their declared defaults.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::CoreError;
use crate::landing::LandingContent;
use crate::seo::SeoSettings;

/// Paths whose rendered pages depend on the SEO global.
pub const SEO_REVALIDATE_PATHS: &[&str] = &["/", "/posts", "/search"];

/// The global documents this site declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalSlug {
    Landing,
    Seo,
}

impl GlobalSlug {
    pub const ALL: [GlobalSlug; 2] = [GlobalSlug::Landing, GlobalSlug::Seo];

    pub fn as_str(self) -> &'static str {
        match self {
            GlobalSlug::Landing => "landing",
            GlobalSlug::Seo => "seo",
        }
    }

    /// Cache tag the presentation layer attaches to its cached read of this
    /// global, e.g. `global_landing`.
    pub fn cache_tag(self) -> String {
        format!("global_{}", self.as_str())
    }

    /// Schema defaults, serialized as the stored JSON shape.
    pub fn default_document(self) -> Result<serde_json::Value, CoreError> {
        match self {
            GlobalSlug::Landing => to_document(&LandingContent::default()),
            GlobalSlug::Seo => to_document(&SeoSettings::default()),
        }
    }

    /// Parse and validate an incoming document against this global's schema.
    ///
    /// Missing groups and fields are filled with their defaults. The result
    /// is the normalized JSON that should be stored.
    pub fn validate_document(self, doc: serde_json::Value) -> Result<serde_json::Value, CoreError> {
        match self {
            GlobalSlug::Landing => normalize::<LandingContent>(doc),
            GlobalSlug::Seo => normalize::<SeoSettings>(doc),
        }
    }
}

impl fmt::Display for GlobalSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlobalSlug {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlobalSlug::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKey {
                kind: "global",
                key: s.to_string(),
            })
    }
}

/// Deserialize a stored document into its typed schema.
pub fn parse_document<T: DeserializeOwned>(doc: serde_json::Value) -> Result<T, CoreError> {
    serde_json::from_value(doc).map_err(|e| CoreError::Validation(format!("Invalid document: {e}")))
}

fn to_document<T: Serialize>(value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| CoreError::Internal(format!("Serialize global: {e}")))
}

fn normalize<T>(doc: serde_json::Value) -> Result<serde_json::Value, CoreError>
where
    T: DeserializeOwned + Serialize + Validate,
{
    let typed: T = parse_document(doc)?;
    typed.validate()?;
    to_document(&typed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
