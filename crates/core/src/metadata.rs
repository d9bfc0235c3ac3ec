//! Page metadata resolution for the public pages.
//!
//! Resolves the `<title>`, description, keywords, and Open Graph block of the
//! home, blog, and search pages from the `seo` global. Blank or missing
//! settings fall back to the built-in copy, and the Open Graph block is
//! always merged over the site-wide defaults.

use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::seo::{
    SeoSettings, TwitterCard, DEFAULT_BLOG_DESCRIPTION, DEFAULT_BLOG_TITLE,
    DEFAULT_ORGANIZATION_NAME, DEFAULT_SEARCH_DESCRIPTION, DEFAULT_SEARCH_TITLE,
    DEFAULT_SITE_DESCRIPTION, DEFAULT_SITE_TITLE, DEFAULT_TWITTER_HANDLE,
};

pub const DEFAULT_OG_SITE_NAME: &str = "SAVA Servicios Financieros";
pub const DEFAULT_OG_TITLE: &str = "SAVA Servicios Financieros";
pub const DEFAULT_OG_DESCRIPTION: &str =
    "Servicios financieros personalizados para impulsar tu crecimiento económico.";
pub const DEFAULT_OG_LOCALE: &str = "es_ES";
/// Path of the fallback share image, relative to the site URL.
pub const DEFAULT_OG_IMAGE_PATH: &str = "/website-template-OG.webp";
/// Publisher shown when the organization has no name.
pub const DEFAULT_PUBLISHER: &str = "SAVA";

/// Public pages whose metadata is driven by the `seo` global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Posts,
    Search,
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Page::Home),
            "posts" => Ok(Page::Posts),
            "search" => Ok(Page::Search),
            other => Err(CoreError::UnknownKey {
                kind: "page",
                key: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraphImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,
    pub images: Vec<OpenGraphImage>,
}

/// Page-specific Open Graph values layered over [`default_open_graph`].
#[derive(Debug, Clone, Default)]
pub struct OpenGraphOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub locale: Option<String>,
    pub images: Option<Vec<OpenGraphImage>>,
}

/// Twitter card block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterMetadata {
    pub card: TwitterCard,
    pub creator: String,
    pub site: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    /// `%s | <organization>`, applied by the frontend to child page titles.
    pub title_template: String,
    pub description: String,
    pub application_name: String,
    pub creator: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterMetadata,
}

/// Names and handles taken from the `social` group, with fallbacks applied.
struct Branding {
    organization: String,
    publisher: String,
    card: TwitterCard,
    handle: String,
}

impl Branding {
    fn from_settings(seo: Option<&SeoSettings>) -> Self {
        let org = seo.and_then(|s| non_blank(s.social.organization.name.as_deref()));
        let handle = seo.and_then(|s| non_blank(s.social.twitter.handle.as_deref()));
        Self {
            organization: org.unwrap_or(DEFAULT_ORGANIZATION_NAME).to_string(),
            publisher: org.unwrap_or(DEFAULT_PUBLISHER).to_string(),
            card: seo.map(|s| s.social.twitter.card_type).unwrap_or_default(),
            handle: handle.unwrap_or(DEFAULT_TWITTER_HANDLE).to_string(),
        }
    }

    fn into_metadata(
        self,
        title: String,
        description: String,
        keywords: Vec<String>,
        open_graph: OpenGraph,
    ) -> PageMetadata {
        PageMetadata {
            title_template: format!("%s | {}", self.organization),
            application_name: self.organization.clone(),
            creator: self.organization,
            publisher: self.publisher,
            keywords,
            open_graph,
            twitter: TwitterMetadata {
                card: self.card,
                creator: self.handle.clone(),
                site: self.handle,
                title: title.clone(),
                description: description.clone(),
            },
            title,
            description,
        }
    }
}

/// Media URLs stored by the CMS are site-relative; share images must be
/// absolute.
pub fn absolute_url(site_url: &str, url: &str) -> String {
    if url.starts_with('/') {
        format!("{}{url}", site_url.trim_end_matches('/'))
    } else {
        url.to_string()
    }
}

/// Site-wide Open Graph defaults. `site_url` has no trailing slash.
pub fn default_open_graph(site_url: &str) -> OpenGraph {
    OpenGraph {
        og_type: "website".into(),
        title: DEFAULT_OG_TITLE.into(),
        description: DEFAULT_OG_DESCRIPTION.into(),
        site_name: DEFAULT_OG_SITE_NAME.into(),
        locale: DEFAULT_OG_LOCALE.into(),
        images: vec![OpenGraphImage {
            url: format!("{}{DEFAULT_OG_IMAGE_PATH}", site_url.trim_end_matches('/')),
        }],
    }
}

/// Merge page overrides over the site defaults. Images are replaced as a
/// whole when given, never mixed with the default image.
pub fn merge_open_graph(site_url: &str, overrides: OpenGraphOverrides) -> OpenGraph {
    let defaults = default_open_graph(site_url);
    OpenGraph {
        og_type: defaults.og_type,
        title: overrides.title.unwrap_or(defaults.title),
        description: overrides.description.unwrap_or(defaults.description),
        site_name: defaults.site_name,
        locale: overrides.locale.unwrap_or(defaults.locale),
        images: overrides.images.unwrap_or(defaults.images),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn or_default(value: Option<&str>, default: &str) -> String {
    non_blank(value).unwrap_or(default).to_string()
}

/// Resolve the metadata of `page`. `seo` is `None` when the global cannot
/// be read, in which case every value falls back to the built-in copy.
pub fn resolve(page: Page, seo: Option<&SeoSettings>, site_url: &str) -> PageMetadata {
    let Some(seo) = seo else {
        return fallback(page, site_url);
    };

    let (title, description) = match page {
        Page::Home => (
            or_default(Some(seo.site_meta.title.as_str()), DEFAULT_SITE_TITLE),
            or_default(Some(seo.site_meta.description.as_str()), DEFAULT_SITE_DESCRIPTION),
        ),
        Page::Posts => (
            or_default(seo.blog_settings.title.as_deref(), DEFAULT_BLOG_TITLE),
            or_default(seo.blog_settings.description.as_deref(), DEFAULT_BLOG_DESCRIPTION),
        ),
        Page::Search => (
            or_default(seo.search_settings.title.as_deref(), DEFAULT_SEARCH_TITLE),
            or_default(seo.search_settings.description.as_deref(), DEFAULT_SEARCH_DESCRIPTION),
        ),
    };

    let keywords = match page {
        Page::Home => seo
            .site_meta
            .keywords
            .iter()
            .map(|k| k.keyword.clone())
            .collect(),
        Page::Posts | Page::Search => Vec::new(),
    };

    let images = seo
        .site_meta
        .default_image
        .as_ref()
        .map(|m| {
            vec![OpenGraphImage {
                url: absolute_url(site_url, &m.url),
            }]
        });

    let open_graph = merge_open_graph(
        site_url,
        OpenGraphOverrides {
            title: Some(title.clone()),
            description: Some(description.clone()),
            locale: Some(seo.site_meta.locale.as_str().to_string()),
            images,
        },
    );

    Branding::from_settings(Some(seo)).into_metadata(title, description, keywords, open_graph)
}

fn fallback(page: Page, site_url: &str) -> PageMetadata {
    let (title, description) = match page {
        Page::Home => (DEFAULT_SITE_TITLE, DEFAULT_SITE_DESCRIPTION),
        Page::Posts => (DEFAULT_BLOG_TITLE, DEFAULT_BLOG_DESCRIPTION),
        Page::Search => (DEFAULT_SEARCH_TITLE, DEFAULT_SEARCH_DESCRIPTION),
    };
    let open_graph = merge_open_graph(
        site_url,
        OpenGraphOverrides {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Default::default()
        },
    );
    Branding::from_settings(None).into_metadata(
        title.into(),
        description.into(),
        Vec::new(),
        open_graph,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
