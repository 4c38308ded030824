//! Lookup of the most recently approved package in a group.

use crate::error::{Error, Result};
use crate::registry::lister::{ListModelPackages, ServiceError};
use crate::registry::types::{ListModelPackagesRequest, ModelPackageSummary};

/// Find the most recently created approved package in a group.
///
/// Issues a list query filtered to approved packages, sorted by creation
/// time, 100 per page. When the registry returns an empty page together
/// with a continuation token, follow-up pages are fetched until a page
/// yields results or the token runs out. The service's sort order is
/// trusted; results are never re-sorted locally.
///
/// # Errors
/// [`Error::NoApprovedPackage`] when the group holds no approved package,
/// [`Error::Registry`] when the registry reports a failure for any call.
pub async fn latest_approved_package<L>(group: &str, lister: &L) -> Result<ModelPackageSummary>
where
    L: ListModelPackages + ?Sized,
{
    let mut request = ListModelPackagesRequest::approved(group);

    let page = lister
        .list_model_packages(&request)
        .await
        .map_err(service_failure)?;
    let mut packages = page.packages;
    let mut next_token = page.next_token;

    // A non-empty page ends the scan even when the registry reports
    // another continuation token.
    while packages.is_empty() {
        let token = match next_token.take() {
            Some(token) => token,
            None => break,
        };

        log::debug!("Fetching more packages for token: {}", token);
        request.next_token = Some(token);

        let page = lister
            .list_model_packages(&request)
            .await
            .map_err(service_failure)?;
        packages.extend(page.packages);
        next_token = page.next_token;
    }

    match packages.into_iter().next() {
        Some(package) => {
            log::info!("Identified the latest approved model package: {}", package.arn);
            Ok(package)
        }
        None => {
            log::error!("No approved model package found for group '{}'", group);
            Err(Error::NoApprovedPackage(group.to_string()))
        }
    }
}

fn service_failure(err: ServiceError) -> Error {
    log::error!("{}", err.message);
    Error::Registry(err.message)
}
