//! Marquee domain core.
//!
//! Owns the movie entity, the create/update DTOs with their field-overlay
//! semantics, and the in-memory [`store::MovieStore`] that is the single
//! source of truth for movie existence, identity, and field values. This
//! crate is HTTP-free; the `marquee-api` crate exposes it over axum.

pub mod error;
pub mod movie;
pub mod store;
pub mod types;
