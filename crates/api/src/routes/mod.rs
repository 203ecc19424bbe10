//! Route tree assembly.
//!
//! Each submodule owns the router for one resource; [`crate::router`] merges
//! them and applies the middleware stack.

pub mod health;
pub mod movies;
pub mod root;
