//! Item lookup collaborator.
//!
//! Resolves item identifiers (and branch-scoped catalog slices) to
//! [`CatalogItem`] records. "Not found" and "could not ask" are kept apart:
//! the former is `Ok(None)`, the latter [`CommerceError::LookupFailed`].

use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::ids::{BranchId, ItemId};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use storefront_data::FetchClient;

/// Everything but RFC 3986 unreserved characters is escaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Source of catalog item records.
pub trait ItemLookup {
    /// Fetch a single item; `Ok(None)` when it does not exist.
    fn get_item(&self, id: &ItemId) -> Result<Option<CatalogItem>, CommerceError>;

    /// Fetch every item published for `scope`.
    fn list_items(&self, scope: &BranchId) -> Result<Vec<CatalogItem>, CommerceError>;
}

impl<L: ItemLookup + ?Sized> ItemLookup for &L {
    fn get_item(&self, id: &ItemId) -> Result<Option<CatalogItem>, CommerceError> {
        (**self).get_item(id)
    }

    fn list_items(&self, scope: &BranchId) -> Result<Vec<CatalogItem>, CommerceError> {
        (**self).list_items(scope)
    }
}

/// Item lookup against the remote item service.
#[derive(Debug, Clone)]
pub struct HttpItemLookup {
    client: FetchClient,
}

impl HttpItemLookup {
    /// `client` should already carry the service base URL.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Convenience constructor using the target's default transport.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(
            FetchClient::new()
                .with_base_url(base_url)
                .with_default_header("Accept", "application/json"),
        )
    }
}

impl ItemLookup for HttpItemLookup {
    fn get_item(&self, id: &ItemId) -> Result<Option<CatalogItem>, CommerceError> {
        let path = format!("/Item/{}", segment(id.as_str()));
        let response = self.client.get(path).send()?;
        if response.is_not_found() {
            tracing::debug!(item = %id, "item not found");
            return Ok(None);
        }
        let item = response.error_for_status()?.json()?;
        Ok(Some(item))
    }

    fn list_items(&self, scope: &BranchId) -> Result<Vec<CatalogItem>, CommerceError> {
        let path = format!("/Item/branch/{}", segment(scope.as_str()));
        let response = self.client.get(path).send()?;
        let items: Vec<CatalogItem> = response.error_for_status()?.json()?;
        tracing::debug!(branch = %scope, count = items.len(), "loaded catalog slice");
        Ok(items)
    }
}

/// Item lookup over an in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticItemLookup {
    items: Vec<CatalogItem>,
}

impl StaticItemLookup {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}

impl ItemLookup for StaticItemLookup {
    fn get_item(&self, id: &ItemId) -> Result<Option<CatalogItem>, CommerceError> {
        Ok(self.items.iter().find(|item| &item.id == id).cloned())
    }

    /// Items without a branch belong to every scope.
    fn list_items(&self, scope: &BranchId) -> Result<Vec<CatalogItem>, CommerceError> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.branch.as_ref().map_or(true, |b| b == scope))
            .cloned()
            .collect())
    }
}

impl From<Vec<CatalogItem>> for StaticItemLookup {
    fn from(items: Vec<CatalogItem>) -> Self {
        Self::new(items)
    }
}
