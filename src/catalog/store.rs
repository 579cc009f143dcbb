//! Whole-swap cache of normalized policy records.
//!
//! The catalog rarely changes, so records are normalized once and shared
//! read-only across queries. A reload replaces the whole `Arc` — no
//! field-level mutation, no fine-grained locking.

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::matching::{normalize_catalog, recommend};
use crate::models::{EligiblePolicy, PolicyRecord, QueryInput, RawPolicy, UserContext};

use super::{loader::load_catalog, CatalogError};

pub struct CatalogStore {
    records: RwLock<Arc<Vec<PolicyRecord>>>,
}

impl CatalogStore {
    /// Build a store from already-loaded raw policies.
    pub fn new(raw: &[RawPolicy]) -> Self {
        Self {
            records: RwLock::new(Arc::new(normalize_catalog(raw))),
        }
    }

    /// Load the catalog from disk and build a store.
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        let raw = load_catalog(path)?;
        Ok(Self::new(&raw))
    }

    /// Hand out the current snapshot. Cheap; queries running on an old
    /// snapshot during a reload simply finish against it.
    pub fn snapshot(&self) -> Result<Arc<Vec<PolicyRecord>>, CatalogError> {
        let guard = self.records.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(Arc::clone(&guard))
    }

    /// Re-normalize from fresh raw policies and swap the snapshot.
    pub fn reload(&self, raw: &[RawPolicy]) -> Result<(), CatalogError> {
        let fresh = Arc::new(normalize_catalog(raw));
        let mut guard = self.records.write().map_err(|_| CatalogError::LockPoisoned)?;
        *guard = fresh;
        tracing::info!(count = guard.len(), "catalog cache swapped");
        Ok(())
    }

    /// Answer one wire-level query against the current snapshot.
    pub fn query(&self, query: &QueryInput) -> Result<Vec<EligiblePolicy>, CatalogError> {
        let user = UserContext::from_query(query)?;
        let snapshot = self.snapshot()?;
        Ok(recommend(&snapshot, &user))
    }
}
