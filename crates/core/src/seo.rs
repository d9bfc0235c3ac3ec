//! Schema of the `seo` global: site-wide metadata, social cards, and the
//! per-page settings for the blog and search pages.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::landing::Media;
use crate::validation::not_blank;

pub const DEFAULT_SITE_TITLE: &str =
    "SAVA Servicios Financieros - Soluciones financieras a tu alcance";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Ofrecemos servicios financieros personalizados para \
     impulsar tu crecimiento económico. Asesoría financiera, préstamos personales, inversiones y \
     más.";
pub const DEFAULT_SEARCH_TITLE: &str = "Búsqueda | SAVA Servicios Financieros";
pub const DEFAULT_SEARCH_DESCRIPTION: &str =
    "Busca información sobre servicios financieros, inversiones, préstamos y más";
pub const DEFAULT_BLOG_TITLE: &str = "Blog | SAVA Servicios Financieros";
pub const DEFAULT_BLOG_DESCRIPTION: &str =
    "Artículos y noticias sobre finanzas, inversiones y economía personal";
pub const DEFAULT_ORGANIZATION_NAME: &str = "SAVA Servicios Financieros";
pub const DEFAULT_ORGANIZATION_URL: &str = "https://sava.com";
pub const DEFAULT_TWITTER_HANDLE: &str = "@SAVA";

const DEFAULT_KEYWORDS: &[&str] = &[
    "finanzas personales",
    "servicios financieros",
    "asesoría financiera",
    "inversiones",
    "préstamos",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoSettings {
    #[validate(nested)]
    pub site_meta: SiteMeta,
    #[validate(nested)]
    pub social: Social,
    pub search_settings: PageSettings,
    pub blog_settings: PageSettings,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            site_meta: SiteMeta::default(),
            social: Social::default(),
            search_settings: PageSettings::new(DEFAULT_SEARCH_TITLE, DEFAULT_SEARCH_DESCRIPTION),
            blog_settings: PageSettings::new(DEFAULT_BLOG_TITLE, DEFAULT_BLOG_DESCRIPTION),
        }
    }
}

/// Open Graph locale of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "es_LA")]
    EsLa,
    #[serde(rename = "en_US")]
    EnUs,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::EsEs => "es_ES",
            Locale::EsLa => "es_LA",
            Locale::EnUs => "en_US",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteMeta {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(length(min = 1), nested)]
    pub keywords: Vec<Keyword>,
    /// Fallback Open Graph image. Absent until an editor uploads one.
    #[validate(nested)]
    pub default_image: Option<Media>,
    pub locale: Locale,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.into(),
            description: DEFAULT_SITE_DESCRIPTION.into(),
            keywords: DEFAULT_KEYWORDS
                .iter()
                .map(|k| Keyword {
                    keyword: (*k).to_string(),
                })
                .collect(),
            default_image: None,
            locale: Locale::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Keyword {
    #[validate(custom(function = "not_blank"))]
    pub keyword: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Social {
    pub twitter: Twitter,
    #[validate(nested)]
    pub organization: Organization,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
    App,
    Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Twitter {
    pub handle: Option<String>,
    pub card_type: TwitterCard,
}

impl Default for Twitter {
    fn default() -> Self {
        Self {
            handle: Some(DEFAULT_TWITTER_HANDLE.into()),
            card_type: TwitterCard::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Organization {
    pub name: Option<String>,
    pub url: Option<String>,
    #[validate(nested)]
    pub logo: Option<Media>,
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            name: Some(DEFAULT_ORGANIZATION_NAME.into()),
            url: Some(DEFAULT_ORGANIZATION_URL.into()),
            logo: None,
        }
    }
}

/// Title and description override for a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageSettings {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
