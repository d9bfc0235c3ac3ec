//! Domain layer of the SAVA content backend.
//!
//! Zero I/O: constants, validation, and the typed schemas of the CMS globals,
//! shared by the repository and HTTP layers.

pub mod contact;
pub mod error;
pub mod globals;
pub mod landing;
pub mod metadata;
pub mod pagination;
pub mod seo;
pub mod types;
pub mod validation;
