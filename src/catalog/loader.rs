//! Catalog loading from the external static dataset.

use std::fs;
use std::path::Path;

use crate::models::RawPolicy;

use super::CatalogError;

/// Load the raw policy catalog from a JSON file.
///
/// An unreadable file surfaces as [`CatalogError::Unavailable`]; a file
/// that reads but does not deserialize surfaces as
/// [`CatalogError::Malformed`]. An empty array is a valid catalog.
pub fn load_catalog(path: &Path) -> Result<Vec<RawPolicy>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let policies: Vec<RawPolicy> = serde_json::from_str(&text)?;
    tracing::info!(count = policies.len(), path = %path.display(), "catalog loaded");
    Ok(policies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "Policy Title": "청년 월세 지원",
            "Description": "무주택 청년 월세 지원",
            "Details": [
                {"Title": "연령", "Content": "만 19세 ~ 34세"},
                {"Title": "사업 신청 기간", "Content": "2024.03.01. ~ 2024.12.31."}
            ],
            "Original Link": "https://example.org/policy/1"
        }
    ]"#;

    #[test]
    fn loads_well_formed_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let policies = load_catalog(file.path()).unwrap();
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].title, "청년 월세 지원");
        assert_eq!(policies[0].details.len(), 2);
        assert_eq!(policies[0].details[0].title, "연령");
    }

    #[test]
    fn empty_array_is_a_valid_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let policies = load_catalog(file.path()).unwrap();
        assert!(policies.is_empty());
    }

    #[test]
    fn missing_file_is_unavailable_not_malformed() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable { .. }));
    }

    #[test]
    fn garbage_content_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}
