//! Domain layer for the hubstate core.
//!
//! This module contains the vocabulary types shared across the crate,
//! independent of the store mechanics or persistence concerns. It follows
//! domain-driven design principles by keeping the data model isolated from
//! external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`theme`]: Closed theme-name set with fallback parsing
//! - [`query`]: Search query, patch, and facet catalog model
//! - [`package`]: Package and repository read models

pub mod error;
pub mod package;
pub mod query;
pub mod theme;

pub use error::{HubStateError, Result};
pub use package::{
    MaintainerInfo, PackageDetail, PackageKind, PackageSummary, Repository, SearchResults, Stats,
};
pub use query::{FacetCatalog, SearchQuery, SearchQueryPatch};
pub use theme::ThemeName;
