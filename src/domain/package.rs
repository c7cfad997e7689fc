//! Package and repository read models.
//!
//! These are the result shapes the excluded data-fetching layer produces and
//! view adapters consume. The core never constructs or mutates them; they are
//! defined here so the whole application shares one vocabulary and one wire
//! format. Serde field names match the backend API (`package_id`,
//! `chart_repository`, and so on).

use serde::{Deserialize, Serialize};

/// Kind of a package, numeric on the wire.
///
/// # Examples
///
/// ```
/// use hubstate::domain::PackageKind;
///
/// let json = serde_json::to_string(&PackageKind::Operator).unwrap();
/// assert_eq!(json, "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PackageKind {
    /// A Helm chart.
    Chart,
    /// An operator.
    Operator,
}

impl From<PackageKind> for u8 {
    fn from(kind: PackageKind) -> Self {
        match kind {
            PackageKind::Chart => 0,
            PackageKind::Operator => 1,
        }
    }
}

impl TryFrom<u8> for PackageKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Chart),
            1 => Ok(Self::Operator),
            other => Err(format!("unknown package kind: {other}")),
        }
    }
}

/// A repository packages are published from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Machine name, used as a facet value in search queries.
    pub name: String,
    /// Human-readable name shown in the UI.
    pub display_name: String,
    /// Repository URL.
    pub url: String,
}

/// Package maintainer contact information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintainerInfo {
    /// Maintainer name, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    pub email: String,
}

/// A package as it appears in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    /// Stable package identifier.
    pub package_id: String,
    /// Package kind.
    pub kind: PackageKind,
    /// Machine name.
    pub name: String,
    /// Human-readable name, when one differs from `name`.
    pub display_name: Option<String>,
    /// Short description.
    pub description: String,
    /// Logo image URL, when published.
    pub logo_url: Option<String>,
    /// Version of the packaged application.
    pub app_version: String,
    /// Repository the package belongs to.
    #[serde(rename = "chart_repository")]
    pub repository: Repository,
}

/// Full package detail, as shown on a package page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDetail {
    /// Summary fields shared with search results.
    #[serde(flatten)]
    pub summary: PackageSummary,
    /// Rendered readme content, when published.
    pub readme: Option<String>,
    /// All published versions.
    pub available_versions: Vec<String>,
    /// The version this detail describes.
    pub version: String,
    /// Project home page, when published.
    pub home_url: Option<String>,
    /// Keywords, used as facet values in search queries.
    pub keywords: Vec<String>,
    /// Maintainer contacts.
    pub maintainers: Vec<MaintainerInfo>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching packages.
    pub packages: Vec<PackageSummary>,
}

/// Site-wide counters shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Total number of packages.
    pub packages: u64,
    /// Total number of released versions.
    pub releases: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_kind_wire_format_is_numeric() {
        assert_eq!(serde_json::to_string(&PackageKind::Chart).unwrap(), "0");
        let kind: PackageKind = serde_json::from_str("1").unwrap();
        assert_eq!(kind, PackageKind::Operator);
        assert!(serde_json::from_str::<PackageKind>("7").is_err());
    }

    #[test]
    fn summary_uses_backend_field_names() {
        let summary = PackageSummary {
            package_id: "p1".to_string(),
            kind: PackageKind::Chart,
            name: "ingress".to_string(),
            display_name: None,
            description: "an ingress controller".to_string(),
            logo_url: None,
            app_version: "1.2.3".to_string(),
            repository: Repository {
                name: "stable".to_string(),
                display_name: "Stable".to_string(),
                url: "https://charts.example.com".to_string(),
            },
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("chart_repository"));
        assert!(json.contains("package_id"));

        let back: PackageSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
