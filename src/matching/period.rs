//! Period-string normalization.
//!
//! Catalog active-periods arrive in around twenty incompatible textual
//! shapes. This module tries them against an explicit, ordered registry of
//! (regex, constructor) pairs and returns the first structural match.
//! Order is load-bearing: several patterns are structural subsets of
//! others, so a looser pattern tried first would mis-parse a stricter one.
//!
//! The parser is pure and total: anything unrecognized comes back as
//! `None`, which downstream reads as "no temporal constraint".

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

use crate::models::{DateRange, SpecialCase};

/// Continuous/undetermined tokens, checked before any date pattern.
/// A hit short-circuits even if date-like substrings also occur.
static SPECIAL_TOKENS: &[(&str, SpecialCase)] = &[
    ("연중", SpecialCase::YearRound),
    ("예산소진시까지", SpecialCase::UntilBudgetExhausted),
    ("계속사업", SpecialCase::ContinuingProgram),
    ("현재", SpecialCase::Current),
    ("상시", SpecialCase::AlwaysOpen),
    ("미정", SpecialCase::Undetermined),
];

struct PeriodPattern {
    name: &'static str,
    regex: Regex,
    build: fn(&Captures) -> Option<DateRange>,
}

impl PeriodPattern {
    fn new(
        name: &'static str,
        pattern: &str,
        build: fn(&Captures) -> Option<DateRange>,
    ) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("static period pattern must compile"),
            build,
        }
    }
}

/// The registry, in priority order. Input has had all whitespace removed
/// before matching, so the patterns are written without `\s`.
static PERIOD_PATTERNS: LazyLock<Vec<PeriodPattern>> = LazyLock::new(|| {
    vec![
        // 2024.03.01. ~ 2024.12.31.
        PeriodPattern::new(
            "full_date_dots",
            r"(\d{4})\.(\d{1,2})\.(\d{1,2})\.?~(\d{4})\.(\d{1,2})\.(\d{1,2})\.?",
            build_full_date,
        ),
        // 2024년 3월 1일 ~ 2024년 12월 31일, optionally suffixed (예정)
        PeriodPattern::new(
            "full_date_korean",
            r"(\d{4})년(\d{1,2})월(\d{1,2})일~(\d{4})년(\d{1,2})월(\d{1,2})일(?:\(예정\))?",
            build_full_date,
        ),
        // 2024. 3. ~ 2024. 12.
        PeriodPattern::new(
            "year_month_dots",
            r"(\d{4})\.(\d{1,2})\.~(\d{4})\.(\d{1,2})\.",
            build_year_month,
        ),
        // 2024-03-01 ~ 2024-12-31
        PeriodPattern::new(
            "full_date_hyphens",
            r"(\d{4})-(\d{2})-(\d{2})~(\d{4})-(\d{2})-(\d{2})",
            build_full_date,
        ),
        // 2024. 3. ~ 12. (same year, different months)
        PeriodPattern::new(
            "same_year_months",
            r"(\d{4})\.(\d{1,2})\.~(\d{1,2})\.",
            build_same_year_months,
        ),
        // '23. ~ '25.
        PeriodPattern::new("short_years", r"'(\d{2})\.~'(\d{2})\.", build_short_years),
        // '24. 2. ~ '26. 12.
        PeriodPattern::new(
            "short_year_month",
            r"'(\d{2})\.(\d{1,2})\.~'(\d{2})\.(\d{1,2})\.",
            build_short_year_month,
        ),
        // 2024년 3월 ~ 2024년 12월
        PeriodPattern::new(
            "korean_year_month",
            r"(\d{4})년(\d{1,2})월~(\d{4})년(\d{1,2})월",
            build_year_month,
        ),
        // 2024.3 ~ 2024.12 (no trailing dots)
        PeriodPattern::new(
            "year_month_minimal",
            r"(\d{4})\.(\d{1,2})~(\d{4})\.(\d{1,2})",
            build_year_month,
        ),
        // 2024. ~ 2025. (years only)
        PeriodPattern::new("years_only", r"(\d{4})\.~(\d{4})\.", build_years_only),
        // '24.1. ~ 12. (abbreviated year, same-year span)
        PeriodPattern::new(
            "short_same_year_months",
            r"'(\d{2})\.(\d{1,2})\.?~(\d{1,2})\.",
            build_short_same_year_months,
        ),
        // 2024. 5. 17.(금) — single announced date with weekday
        PeriodPattern::new(
            "date_with_weekday",
            r"(\d{4})\.(\d{1,2})\.(\d{1,2})\.\([월화수목금토일]\)",
            build_single_date,
        ),
        // □2024.3.~2024.12 — bulleted year-month span
        PeriodPattern::new(
            "bullet_year_month",
            r"[□○•](\d{4})\.(\d{1,2})\.~(\d{4})\.(\d{1,2})",
            build_year_month,
        ),
        // ○사업기간:'24.1.~12. (or 추진기간), optional trailing ※ note
        PeriodPattern::new(
            "bullet_same_year_months",
            r"[□○•](?:사업|추진)기간:'(\d{2})\.(\d{1,2})\.~(\d{1,2})\.(?:※.*)?",
            build_short_same_year_months,
        ),
        // •사업기간:'24.2.~'26.12. with optional parenthetical annotation
        PeriodPattern::new(
            "bullet_year_month_span",
            r"[•○]사업기간:'(\d{2})\.(\d{1,2})\.~'(\d{2})\.(\d{1,2})\.(?:\([^)]*\))?",
            build_short_year_month,
        ),
        // 2024.02~12 — compact same-year span
        PeriodPattern::new(
            "compact_same_year_months",
            r"(\d{4})\.(\d{2})~(\d{2})",
            build_same_year_months,
        ),
        // 2024.1월~2024.12월
        PeriodPattern::new(
            "year_month_wol",
            r"(\d{4})\.(\d{1,2})월?~(\d{4})\.(\d{1,2})월?",
            build_year_month,
        ),
        // •사업기간:'24.2.~'26.12.(※비고) — annotated span, kept for
        // priority completeness even though the plain form above subsumes it
        PeriodPattern::new(
            "bullet_year_month_span_note",
            r"[•○]사업기간:'(\d{2})\.(\d{1,2})\.~'(\d{2})\.(\d{1,2})\.\(※[^)]*\)",
            build_short_year_month,
        ),
    ]
});

/// Normalize a raw period string into a typed range.
///
/// Pure and total: returns `None` for anything unrecognized. Whitespace
/// is stripped wholesale first, matching how the catalog text is keyed.
pub fn parse_period(raw: &str) -> Option<DateRange> {
    let text: String = raw.split_whitespace().collect();
    if text.is_empty() {
        return None;
    }

    // A bare `-` means "no period given". It must be an exact match:
    // treating it as a substring would swallow every hyphenated date.
    if text == "-" {
        tracing::trace!(token = SpecialCase::NotSpecified.token(), "special period token matched");
        return Some(DateRange::Special(SpecialCase::NotSpecified));
    }
    for (token, case) in SPECIAL_TOKENS {
        if text.contains(token) {
            tracing::trace!(token = case.token(), "special period token matched");
            return Some(DateRange::Special(*case));
        }
    }

    for pattern in PERIOD_PATTERNS.iter() {
        if let Some(caps) = pattern.regex.captures(&text) {
            // A structural match with malformed numerics (month 13, Feb 30)
            // fails this attempt and falls through to the next pattern.
            if let Some(range) = (pattern.build)(&caps) {
                tracing::trace!(pattern = pattern.name, "period matched");
                return Some(range);
            }
        }
    }
    None
}

// ── Capture helpers ─────────────────────────────────────────

fn group_i32(caps: &Captures, idx: usize) -> Option<i32> {
    caps.get(idx)?.as_str().parse().ok()
}

fn group_u32(caps: &Captures, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

fn month(caps: &Captures, idx: usize) -> Option<u32> {
    let m = group_u32(caps, idx)?;
    (1..=12).contains(&m).then_some(m)
}

/// Expand a two-digit year with a "20" prefix.
fn short_year(caps: &Captures, idx: usize) -> Option<i32> {
    Some(2000 + group_i32(caps, idx)?)
}

// ── Constructors, one per structural shape ──────────────────

fn build_full_date(caps: &Captures) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(
        group_i32(caps, 1)?,
        group_u32(caps, 2)?,
        group_u32(caps, 3)?,
    )?;
    let end = NaiveDate::from_ymd_opt(
        group_i32(caps, 4)?,
        group_u32(caps, 5)?,
        group_u32(caps, 6)?,
    )?;
    Some(DateRange::FullDate { start, end })
}

fn build_year_month(caps: &Captures) -> Option<DateRange> {
    Some(DateRange::YearMonth {
        start_year: group_i32(caps, 1)?,
        start_month: month(caps, 2)?,
        end_year: group_i32(caps, 3)?,
        end_month: month(caps, 4)?,
    })
}

fn build_short_year_month(caps: &Captures) -> Option<DateRange> {
    Some(DateRange::YearMonth {
        start_year: short_year(caps, 1)?,
        start_month: month(caps, 2)?,
        end_year: short_year(caps, 3)?,
        end_month: month(caps, 4)?,
    })
}

fn build_same_year_months(caps: &Captures) -> Option<DateRange> {
    Some(DateRange::SameYearMonths {
        year: group_i32(caps, 1)?,
        start_month: month(caps, 2)?,
        end_month: month(caps, 3)?,
    })
}

fn build_short_same_year_months(caps: &Captures) -> Option<DateRange> {
    Some(DateRange::SameYearMonths {
        year: short_year(caps, 1)?,
        start_month: month(caps, 2)?,
        end_month: month(caps, 3)?,
    })
}

fn build_years_only(caps: &Captures) -> Option<DateRange> {
    Some(DateRange::YearsOnly {
        start_year: group_i32(caps, 1)?,
        end_year: group_i32(caps, 2)?,
    })
}

fn build_short_years(caps: &Captures) -> Option<DateRange> {
    Some(DateRange::YearsOnly {
        start_year: short_year(caps, 1)?,
        end_year: short_year(caps, 2)?,
    })
}

fn build_single_date(caps: &Captures) -> Option<DateRange> {
    let date = NaiveDate::from_ymd_opt(
        group_i32(caps, 1)?,
        group_u32(caps, 2)?,
        group_u32(caps, 3)?,
    )?;
    Some(DateRange::SingleDate(date))
}
