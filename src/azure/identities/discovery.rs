//! Tag-based discovery of managed identities created by a provisioning run

use log::{debug, info};

use super::models::ManagedIdentity;
use crate::azure::traits::ManagementApi;
use crate::config::tags;
use crate::error::{ArmError, Result};

/// Sequential cursor over the identity listing of one resource group
///
/// One page is in flight at a time; the next page is only requested once
/// the caller asks for it.
pub struct IdentityPager<'a, A> {
    api: &'a A,
    resource_group: &'a str,
    next_link: Option<String>,
    started: bool,
}

impl<'a, A: ManagementApi> IdentityPager<'a, A> {
    pub fn new(api: &'a A, resource_group: &'a str) -> Self {
        Self {
            api,
            resource_group,
            next_link: None,
            started: false,
        }
    }

    /// Whether another page is available
    pub fn more(&self) -> bool {
        !self.started || self.next_link.is_some()
    }

    /// Fetch the next page
    ///
    /// A missing resource group on the first page yields an empty page and
    /// ends the walk.
    pub async fn next_page(&mut self) -> Result<Vec<ManagedIdentity>> {
        let first = !self.started;
        self.started = true;

        let result = self
            .api
            .list_identities_page(self.resource_group, self.next_link.as_deref())
            .await;

        match result {
            Ok(page) => {
                self.next_link = page.next_link().map(str::to_string);
                Ok(page.value)
            }
            Err(e) if first && e.status() == Some(404) => {
                info!(
                    "Resource group {} not found, no managed identities to discover",
                    self.resource_group
                );
                self.next_link = None;
                Ok(Vec::new())
            }
            Err(e) => {
                self.next_link = None;
                Err(e)
            }
        }
    }
}

/// List the identities in `resource_group` tagged as owned by `owned_tag_key`
///
/// Pages are filtered as they arrive and kept in page order. Any page
/// failure discards everything gathered so far.
pub async fn list_owned_managed_identities<A: ManagementApi>(
    api: &A,
    resource_group: &str,
    owned_tag_key: &str,
) -> Result<Vec<ManagedIdentity>> {
    let mut pager = IdentityPager::new(api, resource_group);
    let mut owned = Vec::new();
    let mut page_num = 0;

    while pager.more() {
        page_num += 1;
        let page = pager.next_page().await.map_err(|e| {
            ArmError::discovery(
                &format!("resource group {} (page {})", resource_group, page_num),
                e,
            )
        })?;
        let total = page.len();
        owned.extend(
            page.into_iter()
                .filter(|identity| identity.is_owned_by(owned_tag_key)),
        );
        debug!(
            "Page {}: {} identities, {} owned so far",
            page_num,
            total,
            owned.len()
        );
    }

    if owned.is_empty() {
        info!(
            "Found no user-assigned managed identities with tag key={}, value={}",
            owned_tag_key,
            tags::OWNED_TAG_VALUE
        );
    }

    Ok(owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::tags::owned_tag_key;
    use crate::azure::testing::{identity, FakeArm};

    #[tokio::test]
    async fn test_discovery_filters_in_page_order() {
        let key = owned_tag_key("cluster1");
        let api = FakeArm::new().with_pages(vec![
            vec![identity("a", Some(&key)), identity("b", None)],
            vec![identity("c", Some(&key))],
        ]);

        let owned = list_owned_managed_identities(&api, "cluster1-oidc", &key)
            .await
            .unwrap();

        let names: Vec<_> = owned.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_discovery_second_page_failure_returns_no_partial_list() {
        let key = owned_tag_key("cluster1");
        let api = FakeArm::new()
            .with_pages(vec![
                vec![identity("a", Some(&key)), identity("b", None)],
                vec![identity("c", Some(&key))],
            ])
            .fail_page(2);

        let err = list_owned_managed_identities(&api, "cluster1-oidc", &key)
            .await
            .unwrap_err();

        match err {
            ArmError::Discovery { scope, .. } => {
                assert!(scope.contains("cluster1-oidc"));
                assert!(scope.contains("page 2"));
            }
            other => panic!("Expected ArmError::Discovery, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_discovery_empty_is_not_an_error() {
        let key = owned_tag_key("cluster1");
        let api = FakeArm::new().with_pages(vec![vec![identity("b", None)]]);

        let owned = list_owned_managed_identities(&api, "cluster1-oidc", &key)
            .await
            .unwrap();
        assert!(owned.is_empty());
    }

    #[tokio::test]
    async fn test_discovery_missing_resource_group_is_empty() {
        let key = owned_tag_key("cluster1");
        let api = FakeArm::new().missing_resource_group();

        let owned = list_owned_managed_identities(&api, "cluster1-oidc", &key)
            .await
            .unwrap();
        assert!(owned.is_empty());
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_pager_stops_after_last_page() {
        let api = FakeArm::new().with_pages(vec![vec![identity("a", None)]]);
        let mut pager = IdentityPager::new(&api, "rg");

        assert!(pager.more());
        let page = pager.next_page().await.unwrap();
        assert_eq!(page.len(), 1);
        assert!(!pager.more());
    }
}
