//! Eligibility matching engine for Korean youth benefit programs.
//!
//! The catalog's temporal and demographic eligibility rules arrive as
//! inconsistent free text. This crate normalizes them into structured
//! predicates — periods, age windows, administrative regions — and
//! evaluates them against a user's age, province, and the current date.
//! Every fallback is explicit: unparseable text always widens
//! eligibility, never narrows it.

pub mod boundary;
pub mod catalog;
pub mod config;
pub mod matching;
pub mod models;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the engine.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
