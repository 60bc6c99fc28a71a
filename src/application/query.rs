//! List query pipeline: free-text filtering, pagination, page metadata.
//!
//! Works over the full in-memory collection the store holds; the derived
//! page is recomputed from scratch on every select, which is cheap at
//! console scale and keeps the store free of cached projections.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{EntryRecord, UserRecord};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search/pagination state for one collection view.
///
/// Invariant: `current_page` stays within
/// `[1, max(1, ceil(filtered / items_per_page))]`; callers re-establish it
/// via `clamp_to` whenever the filtered count or page size changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_term: String,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn with_page_size(items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            ..Default::default()
        }
    }

    /// Documented UI policy: a new term always returns to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Documented UI policy: a new page size always returns to the first
    /// page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Re-establish the page invariant against a new filtered count.
    pub fn clamp_to(&mut self, filtered_count: usize) {
        let last = total_pages(filtered_count, self.items_per_page);
        self.current_page = self.current_page.clamp(1, last);
    }
}

/// Fields a record exposes to free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for EntryRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.body]
    }
}

impl Searchable for UserRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.username]
    }
}

/// Case-insensitive substring filter. An empty term passes the whole
/// collection through, order preserved.
pub fn filter<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items.iter().collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// One derived page plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based display bounds ("showing 11-20 of 34").
    pub start_index: usize,
    pub end_index: usize,
}

/// `ceil(filtered / per_page)`, floored at 1 so an empty collection still
/// renders as a single page rather than page zero.
pub fn total_pages(filtered_count: usize, items_per_page: usize) -> usize {
    filtered_count.div_ceil(items_per_page.max(1)).max(1)
}

/// Slice the filtered collection for the query's page. A page beyond the
/// end yields an empty slice, not an error.
pub fn paginate<T: Clone>(filtered: &[&T], query: &QueryState) -> PageView<T> {
    let per_page = query.items_per_page.max(1);
    let total_items = filtered.len();
    let start = (query.current_page.max(1) - 1).saturating_mul(per_page);
    let items: Vec<T> = filtered
        .iter()
        .skip(start)
        .take(per_page)
        .map(|item| (*item).clone())
        .collect();

    PageView {
        total_pages: total_pages(total_items, per_page),
        total_items,
        start_index: start + 1,
        end_index: (start + per_page).min(total_items),
        items,
    }
}

/// Filter then paginate in one step.
pub fn run<T: Searchable + Clone>(items: &[T], query: &QueryState) -> PageView<T> {
    let filtered = filter(items, &query.search_term);
    paginate(&filtered, query)
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use crate::domain::entities::AuthorSnapshot;
    use crate::domain::types::EntryStatus;

    use super::*;

    fn entry(id: u64, title: &str, body: &str) -> EntryRecord {
        let now = OffsetDateTime::now_utc();
        EntryRecord {
            id,
            title: title.to_string(),
            body: body.to_string(),
            user_id: 1,
            created_at: now,
            updated_at: now,
            status: EntryStatus::Published,
            views: 0,
            likes: 0,
            tags: Vec::new(),
            excerpt: String::new(),
            author: AuthorSnapshot {
                id: 1,
                name: "User 1".to_string(),
                email: "user1@example.com".to_string(),
                avatar: String::new(),
            },
        }
    }

    fn collection(count: u64) -> Vec<EntryRecord> {
        (1..=count)
            .map(|id| entry(id, &format!("Post {id}"), "lorem ipsum"))
            .collect()
    }

    #[test]
    fn empty_term_passes_everything_through_in_order() {
        let items = collection(5);
        let filtered = filter(&items, "");
        assert_eq!(filtered.len(), 5);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[4].id, 5);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_body() {
        let mut items = collection(4);
        items[2].body = "Needle in the haystack".to_string();

        let by_body = filter(&items, "NEEDLE");
        assert_eq!(by_body.len(), 1);
        assert_eq!(by_body[0].id, 3);

        let by_title = filter(&items, "post 2");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 2);
    }

    #[test]
    fn search_counts_exact_matches() {
        let mut items = collection(10);
        for target in [1usize, 4, 7] {
            items[target].title = format!("special {target}");
        }
        let query = QueryState::default();
        let view = run(
            &items,
            &QueryState {
                search_term: "special".to_string(),
                ..query
            },
        );
        assert_eq!(view.total_items, 3);
    }

    #[test]
    fn pages_partition_the_collection() {
        let items = collection(23);
        let mut query = QueryState::with_page_size(7);
        let total = total_pages(items.len(), query.items_per_page);
        assert_eq!(total, 4);

        let mut seen = Vec::new();
        for page in 1..=total {
            query.set_current_page(page);
            let view = run(&items, &query);
            seen.extend(view.items.iter().map(|item| item.id));
        }

        assert_eq!(seen.len(), 23);
        let expected: Vec<u64> = (1..=23).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn out_of_range_page_yields_an_empty_slice() {
        let items = collection(12);
        let mut query = QueryState::default();
        query.set_current_page(5);

        let view = run(&items, &query);
        assert!(view.items.is_empty());
        assert_eq!(view.total_items, 12);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn empty_collection_still_reports_one_page() {
        let items: Vec<EntryRecord> = Vec::new();
        let view = run(&items, &QueryState::default());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.total_items, 0);
        assert!(view.items.is_empty());
    }

    #[test]
    fn display_bounds_match_the_visible_slice() {
        let items = collection(34);
        let mut query = QueryState::default();
        query.set_current_page(2);

        let view = run(&items, &query);
        assert_eq!(view.start_index, 11);
        assert_eq!(view.end_index, 20);
        assert_eq!(view.items.first().map(|item| item.id), Some(11));
    }

    #[test]
    fn changing_the_term_or_page_size_resets_the_page() {
        let mut query = QueryState::default();
        query.set_current_page(4);

        query.set_search_term("abc");
        assert_eq!(query.current_page, 1);

        query.set_current_page(3);
        query.set_items_per_page(20);
        assert_eq!(query.current_page, 1);
        assert_eq!(query.items_per_page, 20);
    }

    #[test]
    fn clamp_pulls_the_page_back_inside_the_range() {
        let mut query = QueryState::default();
        query.set_current_page(3);

        query.clamp_to(12);
        assert_eq!(query.current_page, 2);

        query.clamp_to(0);
        assert_eq!(query.current_page, 1);
    }
}
