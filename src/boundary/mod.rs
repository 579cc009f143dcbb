//! Seams to the external collaborators this engine feeds.
//!
//! The sibling record sources (financial products, housing-subscription
//! listings) and the natural-language plan generator live outside this
//! crate; these traits pin down the shapes they exchange. Retry/backoff
//! around the generator call belongs to the caller, not here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EligiblePolicy, UserContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextSource {
    Policy,
    FinancialProduct,
    HousingSubscription,
}

/// One document handed to the downstream plan generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextDocument {
    pub source: ContextSource,
    pub title: String,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Record source unavailable: {0}")]
    Unavailable(String),

    #[error("Record source returned malformed data: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Plan generation failed: {0}")]
    Failed(String),
}

/// An independent tabular record source whose output is merged alongside
/// this engine's eligible policies.
pub trait SiblingSource {
    fn source(&self) -> ContextSource;
    fn fetch(&self, user: &UserContext) -> Result<Vec<ContextDocument>, SourceError>;
}

/// The opaque text generator consumed by the caller layer.
pub trait PlanGenerator {
    fn generate(
        &self,
        context: &[ContextDocument],
        user: &UserContext,
    ) -> Result<String, GenerationError>;
}

/// Merge eligible policies with sibling-source documents into the ordered
/// context sequence a generator consumes. Policy order is preserved;
/// sibling documents follow in the order their sources are given.
pub fn assemble_context(
    policies: &[EligiblePolicy],
    siblings: &[&dyn SiblingSource],
    user: &UserContext,
) -> Result<Vec<ContextDocument>, SourceError> {
    let mut documents: Vec<ContextDocument> = policies.iter().map(policy_document).collect();
    for sibling in siblings {
        documents.extend(sibling.fetch(user)?);
    }
    Ok(documents)
}

fn policy_document(policy: &EligiblePolicy) -> ContextDocument {
    let mut body = policy.description.clone();
    // Detail order in the lookup map is not stable; sort for determinism.
    let mut keys: Vec<&String> = policy.details.keys().collect();
    keys.sort();
    for key in keys {
        body.push('\n');
        body.push_str(key);
        body.push_str(": ");
        body.push_str(&policy.details[key]);
    }
    if !policy.link.is_empty() {
        body.push('\n');
        body.push_str(&policy.link);
    }
    ContextDocument {
        source: ContextSource::Policy,
        title: policy.title.clone(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    struct StaticSource(Vec<ContextDocument>);

    impl SiblingSource for StaticSource {
        fn source(&self) -> ContextSource {
            ContextSource::FinancialProduct
        }
        fn fetch(&self, _user: &UserContext) -> Result<Vec<ContextDocument>, SourceError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl SiblingSource for FailingSource {
        fn source(&self) -> ContextSource {
            ContextSource::HousingSubscription
        }
        fn fetch(&self, _user: &UserContext) -> Result<Vec<ContextDocument>, SourceError> {
            Err(SourceError::Unavailable("tabular source offline".into()))
        }
    }

    fn user() -> UserContext {
        UserContext::new(27, "인천", NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
    }

    fn policy(title: &str) -> EligiblePolicy {
        EligiblePolicy {
            title: title.into(),
            description: "설명".into(),
            link: "https://example.org".into(),
            details: HashMap::from([("연령".to_string(), "제한없음".to_string())]),
        }
    }

    #[test]
    fn policies_come_first_then_sibling_documents() {
        let sibling = StaticSource(vec![ContextDocument {
            source: ContextSource::FinancialProduct,
            title: "청년 적금".into(),
            body: "연 4.5%".into(),
        }]);

        let docs =
            assemble_context(&[policy("월세 지원")], &[&sibling], &user()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].source, ContextSource::Policy);
        assert_eq!(docs[0].title, "월세 지원");
        assert_eq!(docs[1].source, ContextSource::FinancialProduct);
    }

    #[test]
    fn policy_document_carries_details_and_link() {
        let docs = assemble_context(&[policy("월세 지원")], &[], &user()).unwrap();
        assert!(docs[0].body.contains("연령: 제한없음"));
        assert!(docs[0].body.contains("https://example.org"));
    }

    #[test]
    fn sibling_failure_surfaces_instead_of_silently_dropping() {
        let err = assemble_context(&[policy("월세 지원")], &[&FailingSource], &user())
            .unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }
}
