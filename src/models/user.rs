use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid current_date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}

/// Wire-level query as received at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryInput {
    /// Reference date, `YYYY-MM-DD`.
    pub current_date: String,
    pub user_age: u32,
    /// Province name or recognized alias ("경기", "충청북도", …).
    pub user_region: String,
}

/// One user's eligibility profile, built fresh per query and discarded
/// after filtering.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub age: u32,
    pub region: String,
    pub today: NaiveDate,
}

impl UserContext {
    pub fn new(age: u32, region: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            age,
            region: region.into(),
            today,
        }
    }

    pub fn from_query(query: &QueryInput) -> Result<Self, QueryError> {
        let today = NaiveDate::parse_from_str(&query.current_date, "%Y-%m-%d").map_err(
            |source| QueryError::InvalidDate {
                value: query.current_date.clone(),
                source,
            },
        )?;
        Ok(Self::new(query.user_age, query.user_region.clone(), today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_query_parses_iso_date() {
        let query = QueryInput {
            current_date: "2025-01-10".into(),
            user_age: 31,
            user_region: "서울".into(),
        };
        let user = UserContext::from_query(&query).unwrap();
        assert_eq!(user.today, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(user.age, 31);
    }

    #[test]
    fn from_query_rejects_malformed_date() {
        let query = QueryInput {
            current_date: "2025/01/10".into(),
            user_age: 31,
            user_region: "서울".into(),
        };
        assert!(matches!(
            UserContext::from_query(&query),
            Err(QueryError::InvalidDate { .. })
        ));
    }
}
