//! Request handlers.
//!
//! Each submodule holds the async handler functions for one resource.
//! Handlers go through the [`sava_db::Store`] in [`AppState`](crate::state::AppState)
//! and map errors via [`AppError`](crate::error::AppError), except the public
//! contact endpoint which keeps its own response bodies.

pub mod auth;
pub mod contact;
pub mod globals;
pub mod metadata;
pub mod submissions;
