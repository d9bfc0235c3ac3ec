pub mod contact_submission;
pub mod global;
pub mod user;
