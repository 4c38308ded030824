//! Grove - Rust client for locating approved model packages in a model registry.

mod defaults;
pub mod error;

pub mod registry;

pub use error::{Error, Result};

pub use registry::http::HttpRegistryClient;
pub use registry::latest::latest_approved_package;
pub use registry::lister::{ListModelPackages, ServiceError};
pub use registry::types::{
    ApprovalStatus, ListModelPackagesRequest, ModelPackagePage, ModelPackageSummary, SortBy,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
