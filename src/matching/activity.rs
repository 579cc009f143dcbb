//! Temporal activity evaluation for parsed periods.

use chrono::NaiveDate;

use crate::models::DateRange;

/// Decide whether a period is active relative to a reference date.
///
/// Absence of a parseable constraint (`None`) and the continuous/
/// undetermined tokens (`Special`) both mean "no constraint" — active for
/// any reference date. Otherwise the reference date must not fall before
/// the start bound nor after the end bound, with missing month/day
/// components defaulting to 1 on both ends.
pub fn is_active(period: Option<&DateRange>, today: NaiveDate) -> bool {
    let Some(range) = period else {
        return true;
    };
    if matches!(range, DateRange::Special(_)) {
        return true;
    }
    if let Some(start) = range.start_bound() {
        if today < start {
            return false;
        }
    }
    if let Some(end) = range.end_bound() {
        if today > end {
            return false;
        }
    }
    true
}
