//! The eligibility matching engine: pure, synchronous, side-effect-free.
//!
//! Catalog entries are normalized once per catalog version into
//! [`crate::models::PolicyRecord`]s; [`filter::filter_eligible`] then
//! applies a [`crate::models::UserContext`] against each record.

pub mod activity;
pub mod age;
pub mod filter;
pub mod normalize;
pub mod period;
pub mod region;

pub use activity::is_active;
pub use age::extract_age_range;
pub use filter::{filter_eligible, recommend};
pub use normalize::{normalize, normalize_catalog};
pub use period::parse_period;
pub use region::{classify_regions, resolve_province};
