//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers are thin pass-throughs: they extract already-validated input,
//! call the store, and map errors via [`AppError`](crate::error::AppError).

pub mod movies;
