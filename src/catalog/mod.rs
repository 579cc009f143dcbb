pub mod loader;
pub mod store;

pub use loader::load_catalog;
pub use store::CatalogStore;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The dataset could not be read at all. Must stay distinct from
    /// "catalog loaded, zero records match" — conflating the two makes an
    /// infrastructure failure look like an empty result.
    #[error("Catalog dataset unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Catalog dataset malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Catalog cache lock poisoned")]
    LockPoisoned,

    #[error("Invalid query: {0}")]
    Query(#[from] crate::models::QueryError),
}
