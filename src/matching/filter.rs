//! The final accept/reject decision per record.

use crate::models::{EligiblePolicy, PolicyRecord, UserContext, NATIONWIDE};

use super::activity::is_active;
use super::region::resolve_province;

/// Filter a catalog snapshot against one user, preserving input order.
///
/// Four hard boolean gates, all required: age window, region gate,
/// application-period activity, operating-period activity. A program can
/// be structurally open during its operating window yet have a narrower
/// application sub-window, so both periods are checked independently.
pub fn filter_eligible<'a>(
    records: &'a [PolicyRecord],
    user: &UserContext,
) -> Vec<&'a PolicyRecord> {
    records
        .iter()
        .filter(|record| is_eligible(record, user))
        .collect()
}

/// Filter and project to the outward shape handed downstream.
pub fn recommend(records: &[PolicyRecord], user: &UserContext) -> Vec<EligiblePolicy> {
    filter_eligible(records, user)
        .into_iter()
        .map(EligiblePolicy::from)
        .collect()
}

fn is_eligible(record: &PolicyRecord, user: &UserContext) -> bool {
    record.age_range.contains(user.age)
        && region_gate(record, user)
        && is_active(record.application_period.as_ref(), user.today)
        && is_active(record.operating_period.as_ref(), user.today)
}

/// The region gate passes when either classification set names the user's
/// province, or when either set is the nationwide sentinel — a record open
/// to residence-anywhere or managed at national scope clears the gate
/// regardless of the other field.
fn region_gate(record: &PolicyRecord, user: &UserContext) -> bool {
    if record.managing_regions.contains(NATIONWIDE)
        || record.residence_regions.contains(NATIONWIDE)
    {
        return true;
    }
    match resolve_province(&user.region) {
        Some(province) => {
            record.managing_regions.contains(province)
                || record.residence_regions.contains(province)
        }
        None => false,
    }
}
