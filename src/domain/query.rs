//! Listing query derived from a location
//!
//! The location's query pairs are the storefront's only shareable state. This module
//! reads the recognised keys out of a [`Location`] and turns them into the request the
//! product source and the offline cache understand.

use serde::{Deserialize, Serialize};

use crate::domain::location::Location;

/// Fixed number of products requested per page.
pub const PAGE_SIZE: u32 = 20;

pub const PAGE_KEY: &str = "page";
pub const CATEGORY_KEY: &str = "category";
pub const SEARCH_KEY: &str = "search";
pub const SORT_BY_KEY: &str = "sortBy";
pub const ORDER_KEY: &str = "order";

/// Recognised listing parameters with their defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub page: u32,
    pub category: String,
    pub search: String,
    pub sort_by: String,
    pub order: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category: String::new(),
            search: String::new(),
            sort_by: String::new(),
            order: String::new(),
        }
    }
}

impl ListingQuery {
    /// Reads the listing parameters from a location.
    ///
    /// A missing, non-numeric or zero `page` falls back to 1.
    pub fn from_location(location: &Location) -> Self {
        let text = |key: &str| location.param(key).unwrap_or_default().to_string();
        let page = location
            .param(PAGE_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        Self {
            page,
            category: text(CATEGORY_KEY),
            search: text(SEARCH_KEY),
            sort_by: text(SORT_BY_KEY),
            order: text(ORDER_KEY),
        }
    }

    /// True when any category, search or sort selection differs from the default.
    ///
    /// `order` alone does not count: without `sort_by` it has no effect.
    pub fn is_filter_active(&self) -> bool {
        !self.category.is_empty() || !self.search.is_empty() || !self.sort_by.is_empty()
    }

    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest {
            page: self.page,
            limit: PAGE_SIZE,
            category: self.category.clone(),
            search: self.search.clone(),
            sort_by: self.sort_by.clone(),
            order: self.order.clone(),
        }
    }
}

/// Parameters of one page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub page: u32,
    pub limit: u32,
    pub category: String,
    pub search: String,
    pub sort_by: String,
    pub order: String,
}

impl FetchRequest {
    /// Key of the offline snapshot for this listing view.
    pub fn cache_key(&self) -> String {
        format!(
            "products-{}-{}-{}-{}-{}",
            self.page, self.category, self.search, self.sort_by, self.order
        )
    }

    /// Query pairs sent to the product source. Empty filters are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (PAGE_KEY, self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        for (key, value) in [
            (CATEGORY_KEY, &self.category),
            (SEARCH_KEY, &self.search),
            (SORT_BY_KEY, &self.sort_by),
            (ORDER_KEY, &self.order),
        ] {
            if !value.is_empty() {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }

    /// Whether a result of `len` items means another page probably exists.
    pub fn has_more(&self, len: usize) -> bool {
        len == self.limit as usize
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn location(s: &str) -> Location {
        s.parse().unwrap_or_else(|e| panic!("bad test location {s}: {e}"))
    }

    #[test]
    fn test_defaults_from_root() {
        let query = ListingQuery::from_location(&Location::root());
        assert_eq!(query, ListingQuery::default());
        assert_eq!(query.page, 1);
    }

    #[rstest]
    #[case("/?page=3", 3)]
    #[case("/?page=0", 1)]
    #[case("/?page=-2", 1)]
    #[case("/?page=abc", 1)]
    #[case("/?page=", 1)]
    #[case("/", 1)]
    fn test_page_parsing(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(ListingQuery::from_location(&location(input)).page, expected);
    }

    #[rstest]
    #[case("/?category=shoes&sortBy=price&order=asc", true)]
    #[case("/?search=boots", true)]
    #[case("/?sortBy=title", true)]
    #[case("/?order=desc", false)]
    #[case("/?page=4", false)]
    #[case("/", false)]
    fn test_is_filter_active(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(
            ListingQuery::from_location(&location(input)).is_filter_active(),
            expected
        );
    }

    #[test]
    fn test_cache_key_concatenates_all_parameters() {
        let query = ListingQuery::from_location(&location(
            "/?page=2&category=shoes&search=red&sortBy=price&order=asc",
        ));
        assert_eq!(
            query.fetch_request().cache_key(),
            "products-2-shoes-red-price-asc"
        );
        assert_eq!(
            ListingQuery::default().fetch_request().cache_key(),
            "products-1----"
        );
    }

    #[test]
    fn test_query_pairs_skip_empty_filters() {
        let request = ListingQuery::from_location(&location("/?page=2&category=shoes"))
            .fetch_request();
        assert_eq!(
            request.query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
                ("category", "shoes".to_string()),
            ]
        );
    }

    #[rstest]
    #[case(20, true)]
    #[case(7, false)]
    #[case(0, false)]
    fn test_has_more(#[case] len: usize, #[case] expected: bool) {
        let request = ListingQuery::default().fetch_request();
        assert_eq!(request.has_more(len), expected);
    }
}
