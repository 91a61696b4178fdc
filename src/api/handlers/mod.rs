//! Route handlers.
//!
//! `auth` holds the provider-backed account routes, `health` the readiness probe
//! and `root` the plain liveness answer on `/`.

pub mod auth;
pub mod health;
pub mod root;
