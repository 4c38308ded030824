//! End-to-end lookup behavior against an in-process lister.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use grove::{
    latest_approved_package, ApprovalStatus, Error, ListModelPackages, ListModelPackagesRequest,
    ModelPackagePage, ModelPackageSummary, ServiceError,
};

fn package(arn: &str, group: &str, version: u64) -> ModelPackageSummary {
    ModelPackageSummary {
        arn: arn.to_string(),
        group: group.to_string(),
        version: Some(version),
        approval_status: ApprovalStatus::Approved,
        creation_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        description: Some("churn scorer".to_string()),
    }
}

/// Fixed registry state: one page per continuation token.
///
/// Unlike a consuming script, the state never changes between calls, so
/// repeated lookups observe an unchanged remote registry.
struct StaticRegistry {
    pages: HashMap<Option<String>, ModelPackagePage>,
    calls: AtomicUsize,
}

impl StaticRegistry {
    fn new(pages: Vec<(Option<&str>, ModelPackagePage)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(token, page)| (token.map(String::from), page))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListModelPackages for StaticRegistry {
    async fn list_model_packages(
        &self,
        request: &ListModelPackagesRequest,
    ) -> Result<ModelPackagePage, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(&request.next_token)
            .cloned()
            .ok_or_else(|| ServiceError::message("unknown continuation token"))
    }
}

#[tokio::test]
async fn test_returns_first_package_of_first_populated_page() {
    let registry = StaticRegistry::new(vec![(
        None,
        ModelPackagePage {
            packages: vec![package("arn:pkg/churn/4", "churn", 4)],
            next_token: None,
        },
    )]);

    let found = latest_approved_package("churn", &registry).await.unwrap();
    assert_eq!(found.arn, "arn:pkg/churn/4");
    assert_eq!(found.group, "churn");
    assert_eq!(found.approval_status, ApprovalStatus::Approved);
    assert_eq!(registry.calls(), 1);
}

#[tokio::test]
async fn test_follows_token_past_empty_page() {
    let registry = StaticRegistry::new(vec![
        (
            None,
            ModelPackagePage {
                packages: vec![],
                next_token: Some("page-2".to_string()),
            },
        ),
        (
            Some("page-2"),
            ModelPackagePage {
                packages: vec![package("arn:pkg/churn/2", "churn", 2)],
                next_token: None,
            },
        ),
    ]);

    let found = latest_approved_package("churn", &registry).await.unwrap();
    assert_eq!(found.arn, "arn:pkg/churn/2");
    assert_eq!(registry.calls(), 2);
}

#[tokio::test]
async fn test_not_found_message_names_the_group() {
    let registry = StaticRegistry::new(vec![(
        None,
        ModelPackagePage {
            packages: vec![],
            next_token: None,
        },
    )]);

    let err = latest_approved_package("churn", &registry).await.unwrap_err();
    assert!(matches!(err, Error::NoApprovedPackage(_)));
    assert_eq!(
        err.to_string(),
        "No approved model package found for model package group: churn"
    );
}

#[tokio::test]
async fn test_repeated_lookups_are_identical() {
    let registry = StaticRegistry::new(vec![(
        None,
        ModelPackagePage {
            packages: vec![
                package("arn:pkg/churn/4", "churn", 4),
                package("arn:pkg/churn/3", "churn", 3),
            ],
            next_token: None,
        },
    )]);

    let first = latest_approved_package("churn", &registry).await.unwrap();
    let second = latest_approved_package("churn", &registry).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(registry.calls(), 2);
}
