//! Model package queries against the registry.

pub mod http;
pub mod latest;
pub mod lister;
pub mod types;

pub use http::HttpRegistryClient;
pub use latest::latest_approved_package;
pub use lister::{ListModelPackages, ServiceError};
pub use types::{
    ApprovalStatus, ListModelPackagesRequest, ModelPackagePage, ModelPackageSummary, SortBy,
};
