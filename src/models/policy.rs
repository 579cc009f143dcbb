use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::age::AgeRange;
use super::period::DateRange;

/// One catalog entry exactly as the external loader delivers it.
///
/// `details` is an ordered sequence of (title, content) pairs — order
/// matters for display and titles may repeat; when collapsed to a lookup
/// map the last occurrence wins. Field names mirror the catalog JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPolicy {
    #[serde(rename = "Policy Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Details", default)]
    pub details: Vec<PolicyDetail>,
    #[serde(rename = "Original Link", default)]
    pub original_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyDetail {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
}

/// A catalog entry with its free-text eligibility fields normalized into
/// structured predicates. Derived from a [`RawPolicy`], never mutated —
/// rebuilt wholesale when the catalog reloads.
#[derive(Debug, Clone)]
pub struct PolicyRecord {
    pub title: String,
    pub description: String,
    /// Window during which applications are accepted.
    pub application_period: Option<DateRange>,
    /// Window during which the program itself runs.
    pub operating_period: Option<DateRange>,
    pub age_range: AgeRange,
    /// Provinces classified from the managing-organization text.
    pub managing_regions: HashSet<&'static str>,
    /// Provinces classified from the residence-requirement text.
    pub residence_regions: HashSet<&'static str>,
    pub link: String,
    /// Detail pairs collapsed to a lookup map, last write wins.
    pub details: HashMap<String, String>,
}

/// The outward projection of an eligible record, handed to the
/// downstream plan generator alongside sibling record sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligiblePolicy {
    pub title: String,
    pub description: String,
    pub link: String,
    pub details: HashMap<String, String>,
}

impl From<&PolicyRecord> for EligiblePolicy {
    fn from(record: &PolicyRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            link: record.link.clone(),
            details: record.details.clone(),
        }
    }
}
