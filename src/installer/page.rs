//! Paginated listings.
//!
//! [`Page`] doubles as the wire envelope of the remote listing endpoint:
//! `{items, totalItemsCount, size, hasNextPage, hasPreviousPage,
//! nextPageRef?, previousPageRef?}`.

use serde::{Deserialize, Serialize};

use crate::error::{OutfitterError, Result};

/// Offset and size needed to fetch a neighbouring page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRef {
    /// Number of items to skip.
    pub item_offset: usize,
    /// Number of items to fetch.
    pub page_size: usize,
}

/// One page of a stably ordered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    total_items_count: usize,
    size: usize,
    has_next_page: bool,
    has_previous_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_page_ref: Option<PageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_page_ref: Option<PageRef>,
}

impl<T> Page<T> {
    /// Build a page holding `items`, which start at `skip_count` within a
    /// listing of `total` items, for a request of `max_items`.
    pub fn new(items: Vec<T>, skip_count: usize, max_items: usize, total: usize) -> Self {
        let end = skip_count.saturating_add(items.len());
        let has_next_page = end < total;
        let has_previous_page = skip_count > 0;

        Self {
            next_page_ref: has_next_page.then_some(PageRef {
                item_offset: end,
                page_size: max_items,
            }),
            previous_page_ref: has_previous_page.then(|| PageRef {
                item_offset: skip_count.saturating_sub(max_items),
                page_size: max_items,
            }),
            items,
            total_items_count: total,
            size: max_items,
            has_next_page,
            has_previous_page,
        }
    }

    /// Slice a page out of a fully materialized, already ordered listing.
    pub fn from_listing(listing: Vec<T>, max_items: usize, skip_count: usize) -> Result<Self> {
        check_page_arguments(max_items)?;

        let total = listing.len();
        let items: Vec<T> = listing
            .into_iter()
            .skip(skip_count)
            .take(max_items)
            .collect();

        Ok(Self::new(items, skip_count, max_items, total))
    }

    /// Items on this page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Total number of items in the listing snapshot.
    pub fn total_items_count(&self) -> usize {
        self.total_items_count
    }

    /// Page size that was requested.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether items follow this page.
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Whether items precede this page.
    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// Reference to the next page, if any.
    pub fn next_page_ref(&self) -> Option<PageRef> {
        self.next_page_ref
    }

    /// Reference to the previous page, if any.
    pub fn previous_page_ref(&self) -> Option<PageRef> {
        self.previous_page_ref
    }
}

/// Reject page requests that can never make progress.
pub fn check_page_arguments(max_items: usize) -> Result<()> {
    if max_items == 0 {
        return Err(OutfitterError::illegal_argument(
            "maxItems must be greater than 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_next_only() {
        let page = Page::from_listing(vec![1, 2, 3, 4, 5], 2, 0).unwrap();
        assert_eq!(page.items(), &[1, 2]);
        assert_eq!(page.total_items_count(), 5);
        assert_eq!(page.size(), 2);
        assert!(page.has_next_page());
        assert!(!page.has_previous_page());
        assert_eq!(
            page.next_page_ref(),
            Some(PageRef {
                item_offset: 2,
                page_size: 2
            })
        );
        assert_eq!(page.previous_page_ref(), None);
    }

    #[test]
    fn middle_page_has_both_refs() {
        let page = Page::from_listing(vec![1, 2, 3, 4, 5], 2, 2).unwrap();
        assert_eq!(page.items(), &[3, 4]);
        assert!(page.has_next_page());
        assert!(page.has_previous_page());
        assert_eq!(page.previous_page_ref().unwrap().item_offset, 0);
        assert_eq!(page.next_page_ref().unwrap().item_offset, 4);
    }

    #[test]
    fn last_page_has_previous_only() {
        let page = Page::from_listing(vec![1, 2, 3, 4, 5], 2, 4).unwrap();
        assert_eq!(page.items(), &[5]);
        assert!(!page.has_next_page());
        assert!(page.has_previous_page());
        assert_eq!(page.next_page_ref(), None);
    }

    #[test]
    fn skipping_past_the_end_yields_empty_page() {
        let page = Page::from_listing(vec![1, 2], 10, 5).unwrap();
        assert!(page.items().is_empty());
        assert_eq!(page.total_items_count(), 2);
        assert!(!page.has_next_page());
        assert!(page.has_previous_page());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = Page::from_listing(vec![1], 0, 0);
        assert!(matches!(
            result,
            Err(OutfitterError::IllegalArgument { .. })
        ));
    }

    #[test]
    fn serializes_as_wire_envelope() {
        let page = Page::from_listing(vec!["a", "b", "c"], 1, 1).unwrap();
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["items"], serde_json::json!(["b"]));
        assert_eq!(json["totalItemsCount"], 3);
        assert_eq!(json["size"], 1);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPreviousPage"], true);
        assert_eq!(json["nextPageRef"]["itemOffset"], 2);
        assert_eq!(json["previousPageRef"]["pageSize"], 1);
    }

    #[test]
    fn missing_refs_are_omitted_and_optional() {
        let json = r#"{
            "items": [1],
            "totalItemsCount": 1,
            "size": 10,
            "hasNextPage": false,
            "hasPreviousPage": false
        }"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items(), &[1]);
        assert_eq!(page.next_page_ref(), None);

        let out = serde_json::to_value(&page).unwrap();
        assert!(out.get("nextPageRef").is_none());
    }
}
