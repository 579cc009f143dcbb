//! Catalog normalization: one structured [`PolicyRecord`] per raw entry.

use std::collections::HashMap;

use crate::models::{PolicyRecord, RawPolicy};

use super::age::extract_age_range;
use super::period::parse_period;
use super::region::classify_regions;

/// Detail-field titles as they appear in the catalog.
const APPLICATION_PERIOD_FIELD: &str = "사업 신청 기간";
const OPERATING_PERIOD_FIELD: &str = "사업 운영 기간";
const AGE_FIELD: &str = "연령";
const MANAGING_ORG_FIELD: &str = "주관 기관";
const RESIDENCE_FIELD: &str = "거주지 및 소득";

/// Placeholder for an absent period field. Unparseable by construction,
/// so it resolves to "no temporal constraint" downstream.
const MISSING_PERIOD: &str = "__";

/// Default for an absent age field: no restriction.
const MISSING_AGE: &str = "제한없음";

/// Normalize one raw catalog entry.
pub fn normalize(raw: &RawPolicy) -> PolicyRecord {
    // Collapse ordered detail pairs to a lookup map; titles may repeat
    // and the last occurrence wins.
    let details: HashMap<String, String> = raw
        .details
        .iter()
        .map(|d| (d.title.clone(), d.content.clone()))
        .collect();

    let application_period = parse_field_period(&details, APPLICATION_PERIOD_FIELD, &raw.title);
    let operating_period = parse_field_period(&details, OPERATING_PERIOD_FIELD, &raw.title);

    let age_text = details
        .get(AGE_FIELD)
        .map(String::as_str)
        .unwrap_or(MISSING_AGE);
    let age_range = extract_age_range(age_text);

    let managing_text = details
        .get(MANAGING_ORG_FIELD)
        .map(String::as_str)
        .unwrap_or("");
    let residence_text = details
        .get(RESIDENCE_FIELD)
        .map(String::as_str)
        .unwrap_or("");

    PolicyRecord {
        title: raw.title.clone(),
        description: raw.description.clone(),
        application_period,
        operating_period,
        age_range,
        managing_regions: classify_regions(managing_text),
        residence_regions: classify_regions(residence_text),
        link: raw.original_link.clone(),
        details,
    }
}

/// Normalize a whole catalog, preserving order.
pub fn normalize_catalog(raw: &[RawPolicy]) -> Vec<PolicyRecord> {
    raw.iter().map(normalize).collect()
}

fn parse_field_period(
    details: &HashMap<String, String>,
    field: &'static str,
    policy_title: &str,
) -> Option<crate::models::DateRange> {
    let text = details.get(field).map(String::as_str).unwrap_or(MISSING_PERIOD);
    let parsed = parse_period(text);
    if parsed.is_none() && text != MISSING_PERIOD {
        tracing::warn!(
            policy = %policy_title,
            field,
            value = %text,
            "period text matched no known pattern, treating as unconstrained"
        );
    }
    parsed
}
