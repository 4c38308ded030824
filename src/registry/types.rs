//! Wire types for the registry list API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Approval state of a model package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// Cleared for deployment
    Approved,
    /// Awaiting manual review
    PendingManualApproval,
    /// Rejected by a reviewer
    Rejected,
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "Approved"),
            Self::PendingManualApproval => write!(f, "PendingManualApproval"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Sort key for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Registration time, newest first
    CreationTime,
    /// Package name
    Name,
}

/// Summary of a model package as reported by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPackageSummary {
    /// Unique package ARN
    pub arn: String,
    /// Group the package belongs to
    pub group: String,
    /// Version number within the group
    #[serde(default)]
    pub version: Option<u64>,
    /// Approval state
    pub approval_status: ApprovalStatus,
    /// When the package was registered
    pub creation_time: DateTime<Utc>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Parameters for a list query against the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListModelPackagesRequest {
    /// Group to list packages from
    pub group: String,
    /// Restrict results to this approval state
    #[serde(default)]
    pub approval_status: Option<ApprovalStatus>,
    /// Sort key
    pub sort_by: SortBy,
    /// Page size cap
    #[serde(default = "defaults::max_results")]
    pub max_results: u32,
    /// Continuation token from a previous page
    #[serde(default)]
    pub next_token: Option<String>,
}

impl ListModelPackagesRequest {
    /// Query for approved packages in a group, newest first.
    pub fn approved(group: &str) -> Self {
        Self {
            group: group.to_string(),
            approval_status: Some(ApprovalStatus::Approved),
            sort_by: SortBy::CreationTime,
            max_results: defaults::MAX_RESULTS,
            next_token: None,
        }
    }
}

/// One page of list results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelPackagePage {
    /// Package summaries in service sort order
    #[serde(default)]
    pub packages: Vec<ModelPackageSummary>,
    /// Token for the next page, when more results exist
    #[serde(default)]
    pub next_token: Option<String>,
}
