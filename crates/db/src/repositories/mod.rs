//! Repository layer: one zero-sized struct per table, with `&PgPool`-taking
//! async methods.

pub mod contact_submission_repo;
pub mod global_repo;
pub mod user_repo;

pub use contact_submission_repo::ContactSubmissionRepo;
pub use global_repo::GlobalRepo;
pub use user_repo::UserRepo;
