//! # Waypoint (Authentication Gateway)
//!
//! `waypoint` exposes a small JSON API for signup, login, logout and user lookup,
//! and delegates every operation to a hosted identity provider (a GoTrue auth API
//! under `/auth/v1` plus a PostgREST data API under `/rest/v1`).
//!
//! ## Envelope
//!
//! Every auth route answers with the same JSON shape:
//! `{success, message?, user?, session?}`. Provider failures are reported as
//! `500` with the provider's error text as the message.
//!
//! ## Signup
//!
//! Signup is three provider calls: create the account, then insert a `profiles`
//! row and a `settings` row keyed by the new user id. The calls are not atomic.
//! If a dependent write fails the account is deleted again on a best-effort basis.
//!
//! ## Session check
//!
//! `/auth/check-session` only confirms that the user exists. It does not verify
//! any token.

pub mod api;
pub mod cli;
pub mod provider;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
