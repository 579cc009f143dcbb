use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tokens that mean "continuous / undetermined validity" rather than a
/// bounded interval. A period carrying one of these is never inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialCase {
    /// 연중 — runs all year.
    YearRound,
    /// 예산소진시까지 — open until the budget runs out.
    UntilBudgetExhausted,
    /// 계속사업 — a continuing program with no planned end.
    ContinuingProgram,
    /// 현재 — "to the present", i.e. still running.
    Current,
    /// 상시 — always open for application.
    AlwaysOpen,
    /// 미정 — undetermined.
    Undetermined,
    /// A bare `-` in the period field.
    NotSpecified,
}

impl SpecialCase {
    pub fn token(&self) -> &'static str {
        match self {
            Self::YearRound => "연중",
            Self::UntilBudgetExhausted => "예산소진시까지",
            Self::ContinuingProgram => "계속사업",
            Self::Current => "현재",
            Self::AlwaysOpen => "상시",
            Self::Undetermined => "미정",
            Self::NotSpecified => "-",
        }
    }
}

/// One recognized structural shape of a program's textual active-period.
///
/// Numeric components are validated when the variant is built: full dates
/// must be real calendar dates, months must be in 1..=12. Two-digit years
/// have already been expanded with a `20` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    /// Both endpoints are full calendar dates.
    FullDate { start: NaiveDate, end: NaiveDate },
    /// Endpoints carry year and month only.
    YearMonth {
        start_year: i32,
        start_month: u32,
        end_year: i32,
        end_month: u32,
    },
    /// A month span within a single year ("2024.3. ~ 12.").
    SameYearMonths {
        year: i32,
        start_month: u32,
        end_month: u32,
    },
    /// Endpoints carry years only ("'23. ~ '25.").
    YearsOnly { start_year: i32, end_year: i32 },
    /// A single announced date, usually with a weekday ("2024. 5. 17.(금)").
    SingleDate(NaiveDate),
    /// A continuous/undetermined token instead of an interval.
    Special(SpecialCase),
}

impl DateRange {
    /// Lower bound of the period, if the variant carries one.
    /// Missing month/day components default to 1.
    pub fn start_bound(&self) -> Option<NaiveDate> {
        match *self {
            Self::FullDate { start, .. } => Some(start),
            Self::YearMonth {
                start_year,
                start_month,
                ..
            } => NaiveDate::from_ymd_opt(start_year, start_month, 1),
            Self::SameYearMonths {
                year, start_month, ..
            } => NaiveDate::from_ymd_opt(year, start_month, 1),
            Self::YearsOnly { start_year, .. } => NaiveDate::from_ymd_opt(start_year, 1, 1),
            Self::SingleDate(_) | Self::Special(_) => None,
        }
    }

    /// Upper bound of the period, if the variant carries one.
    ///
    /// Missing month/day components also default to 1 — not to the end of
    /// the month or year. A "~ 2024.12" program therefore reads as ending
    /// on 2024-12-01. Kept as-is pending a product decision.
    pub fn end_bound(&self) -> Option<NaiveDate> {
        match *self {
            Self::FullDate { end, .. } => Some(end),
            Self::YearMonth {
                end_year,
                end_month,
                ..
            } => NaiveDate::from_ymd_opt(end_year, end_month, 1),
            Self::SameYearMonths {
                year, end_month, ..
            } => NaiveDate::from_ymd_opt(year, end_month, 1),
            Self::YearsOnly { end_year, .. } => NaiveDate::from_ymd_opt(end_year, 1, 1),
            Self::SingleDate(_) | Self::Special(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_month_bounds_default_day_to_first() {
        let range = DateRange::YearMonth {
            start_year: 2024,
            start_month: 3,
            end_year: 2024,
            end_month: 12,
        };
        assert_eq!(range.start_bound(), Some(date(2024, 3, 1)));
        assert_eq!(range.end_bound(), Some(date(2024, 12, 1)));
    }

    #[test]
    fn years_only_bounds_default_to_january_first() {
        let range = DateRange::YearsOnly {
            start_year: 2023,
            end_year: 2025,
        };
        assert_eq!(range.start_bound(), Some(date(2023, 1, 1)));
        assert_eq!(range.end_bound(), Some(date(2025, 1, 1)));
    }

    #[test]
    fn special_case_tokens_round_trip_to_catalog_text() {
        assert_eq!(SpecialCase::YearRound.token(), "연중");
        assert_eq!(SpecialCase::UntilBudgetExhausted.token(), "예산소진시까지");
        assert_eq!(SpecialCase::ContinuingProgram.token(), "계속사업");
        assert_eq!(SpecialCase::Current.token(), "현재");
        assert_eq!(SpecialCase::AlwaysOpen.token(), "상시");
        assert_eq!(SpecialCase::Undetermined.token(), "미정");
        assert_eq!(SpecialCase::NotSpecified.token(), "-");
    }

    #[test]
    fn special_and_single_date_carry_no_bounds() {
        assert_eq!(DateRange::Special(SpecialCase::AlwaysOpen).start_bound(), None);
        assert_eq!(DateRange::Special(SpecialCase::AlwaysOpen).end_bound(), None);
        let single = DateRange::SingleDate(date(2024, 5, 17));
        assert_eq!(single.start_bound(), None);
        assert_eq!(single.end_bound(), None);
    }
}
