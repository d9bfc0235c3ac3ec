//! Schema of the `landing` global.
//!
//! One group per landing-page section. Field names serialize in camelCase to
//! match the document shape the presentation layer reads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingContent {
    #[validate(nested)]
    pub hero: HeroSection,
    #[validate(nested)]
    pub services: ServicesSection,
    #[validate(nested)]
    pub about: AboutSection,
    #[validate(nested)]
    pub testimonials: TestimonialsSection,
    #[validate(nested)]
    pub contact: ContactSection,
    pub form_settings: FormSettings,
}

/// Reference to an uploaded media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[validate(custom(function = "not_blank"))]
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    #[validate(custom(function = "not_blank"))]
    pub heading: String,
    #[validate(custom(function = "not_blank"))]
    pub subheading: String,
    #[validate(length(max = 2), nested)]
    pub links: Vec<CtaLink>,
    #[validate(nested)]
    pub background_image: Option<Media>,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            heading: "Soluciones financieras a tu alcance".into(),
            subheading: "Nos especializamos en brindar servicios financieros de calidad para \
                         impulsar tu crecimiento económico."
                .into(),
            links: Vec::new(),
            background_image: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkAppearance {
    #[default]
    Default,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CtaLink {
    #[validate(custom(function = "not_blank"))]
    pub label: String,
    #[validate(custom(function = "not_blank"))]
    pub url: String,
    #[serde(default)]
    pub appearance: LinkAppearance,
    #[serde(default)]
    pub new_tab: bool,
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesSection {
    #[validate(custom(function = "not_blank"))]
    pub heading: String,
    #[validate(custom(function = "not_blank"))]
    pub subheading: String,
    #[validate(length(max = 6), nested)]
    pub service_items: Vec<ServiceItem>,
}

impl Default for ServicesSection {
    fn default() -> Self {
        Self {
            heading: "Nuestros Servicios".into(),
            subheading: "Ofrecemos soluciones financieras adaptadas a tus necesidades para \
                         ayudarte a alcanzar tus metas económicas."
                .into(),
            service_items: Vec::new(),
        }
    }
}

/// Icon shown on a service card. Same vocabulary as the contact form's
/// service field, without `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Advisor,
    Loans,
    Planning,
    Business,
    Investments,
    Insurance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub icon: ServiceIcon,
    #[serde(default)]
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutSection {
    #[validate(custom(function = "not_blank"))]
    pub heading: String,
    /// Rich-text editor state, stored opaquely.
    pub content: Option<serde_json::Value>,
    #[validate(nested)]
    pub image: Option<Media>,
    #[validate(length(max = 6), nested)]
    pub values_list: Vec<ValueItem>,
}

impl Default for AboutSection {
    fn default() -> Self {
        Self {
            heading: "Sobre SAVA".into(),
            content: None,
            image: None,
            values_list: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ValueItem {
    #[validate(custom(function = "not_blank"))]
    pub label: String,
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsSection {
    #[validate(custom(function = "not_blank"))]
    pub heading: String,
    pub subheading: Option<String>,
    #[validate(length(max = 10), nested)]
    pub testimonial_items: Vec<Testimonial>,
}

impl Default for TestimonialsSection {
    fn default() -> Self {
        Self {
            heading: "Lo que dicen nuestros clientes".into(),
            subheading: Some(
                "Descubre por qué nuestros clientes confían en SAVA para sus necesidades \
                 financieras."
                    .into(),
            ),
            testimonial_items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[validate(custom(function = "not_blank"))]
    pub quote: String,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

// ---------------------------------------------------------------------------
// Contact details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    #[validate(custom(function = "not_blank"))]
    pub heading: String,
    pub address: Option<String>,
    pub email: Option<String>,
    #[validate(nested)]
    pub phone_numbers: Vec<PhoneNumber>,
    pub business_hours: Option<String>,
    #[validate(nested)]
    pub social_links: Vec<SocialLink>,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            heading: "Contacto".into(),
            address: None,
            email: None,
            phone_numbers: Vec::new(),
            business_hours: None,
            social_links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PhoneNumber {
    #[validate(custom(function = "not_blank"))]
    pub number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Youtube,
    Linkedin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    #[validate(custom(function = "not_blank"))]
    pub url: String,
}

// ---------------------------------------------------------------------------
// Form settings
// ---------------------------------------------------------------------------

/// Copy shown around the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    pub heading: String,
    pub success_message: String,
    pub error_message: String,
    pub send_button_label: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            heading: "Envíanos un mensaje".into(),
            success_message: "Gracias por contactarnos. Nos pondremos en contacto contigo pronto."
                .into(),
            error_message: "Ha ocurrido un error. Por favor intenta nuevamente.".into(),
            send_button_label: "Enviar mensaje".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
