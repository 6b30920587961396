//! Catalog store - pure client-side state over the fetched collection
//!
//! Holds the full fetched collection and the filtered/sorted view derived
//! from it, plus sort and pagination state. No I/O; every mutation here is
//! driven by the app layer.

use std::cmp::Ordering;

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_LINKS};
use crate::models::{Product, ProductPatch};

/// Columns that support click-to-toggle sorting
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortColumn {
    Title,
    Price,
}

/// Sort direction, toggled on each sort request
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Pagination state: 1-based current page and rows per page
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            current_page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Client-side catalog state: full collection, filtered view, sort and
/// pagination
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    all: Vec<Product>,
    view: Vec<Product>,
    search: String,
    sort_title: SortDirection,
    sort_price: SortDirection,
    active_sort: Option<SortColumn>,
    pub pagination: Pagination,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full collection and the view; resets to page 1
    pub fn set_all(&mut self, products: Vec<Product>) {
        self.all = products;
        self.view = self.all.clone();
        self.pagination.current_page = 1;
    }

    /// Recomputes the view as the subsequence of the full collection whose
    /// title contains `term` case-insensitively; resets to page 1
    pub fn filter(&mut self, term: &str) {
        self.search = term.to_string();
        let key = term.to_lowercase();
        self.view = self
            .all
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&key))
            .cloned()
            .collect();
        self.pagination.current_page = 1;
    }

    /// Toggles the column's direction and stably reorders the view.
    /// Pagination is untouched.
    pub fn sort(&mut self, column: SortColumn) {
        let direction = match column {
            SortColumn::Title => {
                self.sort_title = self.sort_title.toggled();
                self.sort_title
            }
            SortColumn::Price => {
                self.sort_price = self.sort_price.toggled();
                self.sort_price
            }
        };
        self.active_sort = Some(column);

        // Vec::sort_by is stable, so equal keys keep their pre-sort order
        self.view.sort_by(|a, b| {
            let ordering = match column {
                SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
                SortColumn::Price => {
                    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
                }
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    /// Prepends to the full collection and rebuilds the view as a plain copy
    /// of it. The active search term is NOT re-applied, so the new product
    /// shows up even when it does not match the current search.
    pub fn insert_front(&mut self, product: Product) {
        self.all.insert(0, product);
        self.view = self.all.clone();
    }

    /// Shallow-merges the present patch fields into the matching entry of
    /// the full collection. Returns false (no-op) when the id is unknown.
    pub fn patch(&mut self, id: i64, patch: &ProductPatch) -> bool {
        match self.all.iter_mut().find(|p| p.id == id) {
            Some(entry) => {
                if let Some(title) = &patch.title {
                    entry.title = title.clone();
                }
                if let Some(price) = patch.price {
                    entry.price = price;
                }
                if let Some(description) = &patch.description {
                    entry.description = description.clone();
                }
                true
            }
            None => false,
        }
    }

    /// Rebuilds the view as a plain copy of the full collection, dropping
    /// any active filter and sort order
    pub fn refresh_view(&mut self) {
        self.view = self.all.clone();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.current_page = page;
    }

    /// Changes the page size and resets to page 1
    pub fn set_items_per_page(&mut self, n: usize) {
        self.pagination.items_per_page = n;
        self.pagination.current_page = 1;
    }

    /// The page-sized slice of the view for the current page, clamped to the
    /// available length. An out-of-range page yields an empty slice; there is
    /// no auto-correction.
    pub fn page_slice(&self) -> &[Product] {
        let per = self.pagination.items_per_page;
        let start = (self.pagination.current_page - 1) * per;
        if start >= self.view.len() {
            return &[];
        }
        let end = (start + per).min(self.view.len());
        &self.view[start..end]
    }

    pub fn total_pages(&self) -> usize {
        let per = self.pagination.items_per_page;
        (self.view.len() + per - 1) / per
    }

    /// Numbered page links on offer: only ever pages 1..=min(total, 5)
    pub fn page_links(&self) -> usize {
        self.total_pages().min(MAX_PAGE_LINKS)
    }

    pub fn view(&self) -> &[Product] {
        &self.view
    }

    pub fn all(&self) -> &[Product] {
        &self.all
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_marker(&self, column: SortColumn) -> (SortDirection, bool) {
        let direction = match column {
            SortColumn::Title => self.sort_title,
            SortColumn::Price => self.sort_price,
        };
        (direction, self.active_sort == Some(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: String::from(title),
            price,
            description: format!("{} description", title),
            category: None,
            images: Vec::new(),
        }
    }

    fn fruit_store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.set_all(vec![
            product(1, "Apple", 10.0),
            product(2, "Banana", 5.0),
            product(3, "Cherry", 7.5),
        ]);
        store
    }

    #[test]
    fn test_filter_is_case_insensitive_substring_on_title() {
        let mut store = fruit_store();
        store.filter("AN");
        let titles: Vec<&str> = store.view().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Banana"]);
        // Full collection unchanged
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let mut store = fruit_store();
        store.filter("e");
        let ids: Vec<i64> = store.view().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_resets_pagination() {
        let mut store = fruit_store();
        store.set_page(3);
        store.filter("a");
        assert_eq!(store.pagination.current_page, 1);
    }

    #[test]
    fn test_set_all_resets_pagination() {
        let mut store = fruit_store();
        store.set_page(2);
        store.set_all(vec![product(9, "Durian", 3.0)]);
        assert_eq!(store.pagination.current_page, 1);
        assert_eq!(store.view().len(), 1);
    }

    #[test]
    fn test_sort_price_toggles_asc_then_desc() {
        let mut store = CatalogStore::new();
        store.set_all(vec![product(1, "A", 10.0), product(2, "B", 5.0)]);

        store.sort(SortColumn::Price);
        let prices: Vec<f64> = store.view().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![5.0, 10.0]);

        store.sort(SortColumn::Price);
        let prices: Vec<f64> = store.view().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![10.0, 5.0]);
    }

    #[test]
    fn test_sort_title_is_case_insensitive() {
        let mut store = CatalogStore::new();
        store.set_all(vec![
            product(1, "banana", 1.0),
            product(2, "Apple", 1.0),
            product(3, "cherry", 1.0),
        ]);
        store.sort(SortColumn::Title);
        let titles: Vec<&str> = store.view().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut store = CatalogStore::new();
        store.set_all(vec![
            product(1, "X", 5.0),
            product(2, "Y", 5.0),
            product(3, "Z", 1.0),
        ]);
        store.sort(SortColumn::Price);
        let ids: Vec<i64> = store.view().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_does_not_touch_pagination() {
        let mut store = fruit_store();
        store.set_page(2);
        store.sort(SortColumn::Title);
        assert_eq!(store.pagination.current_page, 2);
    }

    #[test]
    fn test_insert_front_prepends_exactly_one() {
        let mut store = fruit_store();
        store.insert_front(product(4, "Date", 2.0));
        assert_eq!(store.all().len(), 4);
        assert_eq!(store.all()[0].id, 4);
    }

    #[test]
    fn test_insert_front_ignores_active_filter() {
        let mut store = fruit_store();
        store.filter("an");
        assert_eq!(store.view().len(), 1);
        // The new product does not match "an" but still lands in the view
        store.insert_front(product(4, "Fig", 2.0));
        assert_eq!(store.view().len(), 4);
        assert_eq!(store.view()[0].id, 4);
    }

    #[test]
    fn test_patch_price_only_changes_only_price() {
        let mut store = fruit_store();
        let patch = ProductPatch {
            price: Some(99.0),
            ..ProductPatch::default()
        };
        let found = store.patch(2, &patch);
        assert!(found);
        assert_eq!(store.all()[1].price, 99.0);
        assert_eq!(store.all()[1].title, "Banana");
        assert_eq!(store.all()[0].price, 10.0);
        assert_eq!(store.all()[2].price, 7.5);
    }

    #[test]
    fn test_patch_unknown_id_is_noop() {
        let mut store = fruit_store();
        let before = store.all().to_vec();
        let patch = ProductPatch {
            title: Some(String::from("Ghost")),
            price: Some(0.0),
            description: None,
        };
        let found = store.patch(42, &patch);
        assert!(!found);
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_page_slice_clamps_to_available_length() {
        let mut store = fruit_store();
        store.set_items_per_page(2);
        store.set_page(2);
        assert_eq!(store.page_slice().len(), 1);
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let mut store = fruit_store();
        // 3 items, 10 per page: page 2 is beyond the data
        store.set_page(2);
        assert!(store.page_slice().is_empty());
    }

    #[test]
    fn test_set_items_per_page_resets_pagination() {
        let mut store = fruit_store();
        store.set_page(2);
        store.set_items_per_page(5);
        assert_eq!(store.pagination.current_page, 1);
    }

    #[test]
    fn test_page_links_capped_at_five() {
        let mut store = CatalogStore::new();
        let many: Vec<Product> = (0..100).map(|i| product(i, "P", 1.0)).collect();
        store.set_all(many);
        store.set_items_per_page(10);
        assert_eq!(store.total_pages(), 10);
        assert_eq!(store.page_links(), 5);
    }

    #[test]
    fn test_page_links_below_cap() {
        let mut store = fruit_store();
        store.set_items_per_page(2);
        assert_eq!(store.page_links(), 2);
    }
}
