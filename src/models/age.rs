use serde::{Deserialize, Serialize};

/// Inclusive applicant-age eligibility window.
///
/// `max_age: None` means unbounded. Invariant: when both bounds are
/// present, `min_age <= max_age` — the constructor falls back to the
/// fully-open window instead of ever violating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min_age: u32,
    pub max_age: Option<u32>,
}

impl AgeRange {
    /// No restriction at all: 0 and up.
    pub const OPEN: AgeRange = AgeRange {
        min_age: 0,
        max_age: None,
    };

    /// Build a range, falling back to [`AgeRange::OPEN`] if the bounds
    /// are inverted (a permissive false positive beats silently
    /// excluding a record over garbled text).
    pub fn new(min_age: u32, max_age: Option<u32>) -> Self {
        match max_age {
            Some(max) if min_age > max => Self::OPEN,
            _ => Self { min_age, max_age },
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.min_age && self.max_age.map_or(true, |max| age <= max)
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self::OPEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_range_is_inclusive() {
        let range = AgeRange::new(19, Some(34));
        assert!(range.contains(19));
        assert!(range.contains(34));
        assert!(!range.contains(18));
        assert!(!range.contains(35));
    }

    #[test]
    fn unbounded_max_accepts_any_older_age() {
        let range = AgeRange::new(19, None);
        assert!(range.contains(99));
        assert!(!range.contains(18));
    }

    #[test]
    fn inverted_bounds_fall_back_to_open() {
        let range = AgeRange::new(39, Some(19));
        assert_eq!(range, AgeRange::OPEN);
        assert!(range.contains(0));
    }
}
