//! Age-requirement extraction from free-text eligibility phrases.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::AgeRange;

/// "만 19세 ~ 34세" — bounded window.
static BOUNDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:만\s*)?(\d+)\s*세\s*~\s*(\d+)\s*세").expect("static age pattern must compile")
});

/// "만 19세 ~ 제한 없음" — lower bound only.
static MIN_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:만\s*)?(\d+)\s*세\s*~\s*제한\s*없음")
        .expect("static age pattern must compile")
});

/// Bare "제한 없음" (with or without the internal space).
static NO_LIMIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"제한\s*없음").expect("static age pattern must compile"));

/// Extract a numeric eligibility window from a free-text age phrase.
///
/// Attempts are ordered strictest first. Text matching none of the known
/// shapes yields the fully-open window: a permissive false positive beats
/// silently excluding a record whose text uses an unrecognized phrasing.
pub fn extract_age_range(text: &str) -> AgeRange {
    if let Some(caps) = BOUNDED.captures(text) {
        if let (Ok(min), Ok(max)) = (caps[1].parse(), caps[2].parse()) {
            return AgeRange::new(min, Some(max));
        }
    }
    if let Some(caps) = MIN_ONLY.captures(text) {
        if let Ok(min) = caps[1].parse() {
            return AgeRange::new(min, None);
        }
    }
    if NO_LIMIT.is_match(text) {
        return AgeRange::OPEN;
    }
    if !text.trim().is_empty() {
        tracing::trace!(value = %text, "age phrase matched no known shape, treating as open");
    }
    AgeRange::OPEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_window() {
        assert_eq!(extract_age_range("만 19세 ~ 39세"), AgeRange::new(19, Some(39)));
        assert_eq!(extract_age_range("19세~34세"), AgeRange::new(19, Some(34)));
    }

    #[test]
    fn lower_bound_only() {
        assert_eq!(extract_age_range("만 19세 ~ 제한 없음"), AgeRange::new(19, None));
        assert_eq!(extract_age_range("만 65세 ~ 제한없음"), AgeRange::new(65, None));
    }

    #[test]
    fn explicit_no_limit_phrase() {
        assert_eq!(extract_age_range("제한 없음"), AgeRange::OPEN);
        assert_eq!(extract_age_range("제한없음"), AgeRange::OPEN);
    }

    #[test]
    fn unrecognized_phrasing_defaults_open() {
        assert_eq!(extract_age_range(""), AgeRange::OPEN);
        assert_eq!(extract_age_range("청년이라면 누구나"), AgeRange::OPEN);
    }

    #[test]
    fn inverted_bounds_default_open() {
        assert_eq!(extract_age_range("만 39세 ~ 19세"), AgeRange::OPEN);
    }
}
