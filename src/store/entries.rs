//! Entries slice and reducer.

use crate::application::query::{self, QueryState};
use crate::domain::entities::EntryRecord;

#[derive(Debug, Clone, Default)]
pub struct EntriesSlice {
    pub items: Vec<EntryRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: QueryState,
    /// Sequence of the newest fetch issued; completions carrying an older
    /// sequence are superseded and ignored.
    pub fetch_seq: u64,
}

impl EntriesSlice {
    pub fn with_query(query: QueryState) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }
}

#[derive(Debug)]
pub enum EntriesAction {
    FetchStarted,
    FetchSucceeded { seq: u64, items: Vec<EntryRecord> },
    FetchFailed { seq: u64, message: String },
    Created(EntryRecord),
    Updated(EntryRecord),
    Deleted(u64),
    SearchTermChanged(String),
    PageChanged(usize),
    PageSizeChanged(usize),
    ErrorCleared,
}

pub(super) fn reduce(slice: &mut EntriesSlice, action: EntriesAction) {
    match action {
        EntriesAction::FetchStarted => {
            slice.fetch_seq += 1;
            slice.loading = true;
            slice.error = None;
        }
        EntriesAction::FetchSucceeded { seq, items } => {
            if seq != slice.fetch_seq {
                return;
            }
            slice.loading = false;
            slice.items = items;
            clamp(slice);
        }
        EntriesAction::FetchFailed { seq, message } => {
            if seq != slice.fetch_seq {
                return;
            }
            slice.loading = false;
            slice.error = Some(message);
        }
        EntriesAction::Created(record) => {
            slice.items.insert(0, record);
            clamp(slice);
        }
        EntriesAction::Updated(record) => {
            if let Some(existing) = slice.items.iter_mut().find(|item| item.id == record.id) {
                *existing = record;
            }
        }
        EntriesAction::Deleted(id) => {
            slice.items.retain(|item| item.id != id);
            clamp(slice);
        }
        EntriesAction::SearchTermChanged(term) => {
            slice.query.set_search_term(term);
        }
        EntriesAction::PageChanged(page) => {
            slice.query.set_current_page(page);
            clamp(slice);
        }
        EntriesAction::PageSizeChanged(size) => {
            slice.query.set_items_per_page(size);
        }
        EntriesAction::ErrorCleared => {
            slice.error = None;
        }
    }
}

/// The filtered count may have changed; pull the page back into range.
fn clamp(slice: &mut EntriesSlice) {
    let filtered = query::filter(&slice.items, &slice.query.search_term).len();
    slice.query.clamp_to(filtered);
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use crate::domain::entities::AuthorSnapshot;
    use crate::domain::types::EntryStatus;

    use super::*;

    fn entry(id: u64) -> EntryRecord {
        let now = OffsetDateTime::now_utc();
        EntryRecord {
            id,
            title: format!("Post {id}"),
            body: "body".to_string(),
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
        (1..=count).map(entry).collect()
    }

    #[test]
    fn fetch_lifecycle_sets_and_clears_loading() {
        let mut slice = EntriesSlice::default();
        reduce(&mut slice, EntriesAction::FetchStarted);
        assert!(slice.loading);
        assert_eq!(slice.fetch_seq, 1);

        reduce(
            &mut slice,
            EntriesAction::FetchSucceeded {
                seq: 1,
                items: collection(3),
            },
        );
        assert!(!slice.loading);
        assert_eq!(slice.items.len(), 3);
    }

    #[test]
    fn stale_fetch_completion_is_discarded() {
        let mut slice = EntriesSlice::default();
        reduce(&mut slice, EntriesAction::FetchStarted);
        reduce(&mut slice, EntriesAction::FetchStarted);

        // The first request resolves late; its payload must not win.
        reduce(
            &mut slice,
            EntriesAction::FetchSucceeded {
                seq: 1,
                items: collection(99),
            },
        );
        assert!(slice.items.is_empty());
        assert!(slice.loading);

        reduce(
            &mut slice,
            EntriesAction::FetchSucceeded {
                seq: 2,
                items: collection(3),
            },
        );
        assert_eq!(slice.items.len(), 3);
        assert!(!slice.loading);
    }

    #[test]
    fn stale_fetch_failure_is_discarded_too() {
        let mut slice = EntriesSlice::default();
        reduce(&mut slice, EntriesAction::FetchStarted);
        reduce(&mut slice, EntriesAction::FetchStarted);

        reduce(
            &mut slice,
            EntriesAction::FetchFailed {
                seq: 1,
                message: "boom".to_string(),
            },
        );
        assert!(slice.error.is_none());
        assert!(slice.loading);
    }

    #[test]
    fn created_entries_are_prepended() {
        let mut slice = EntriesSlice {
            items: collection(2),
            ..Default::default()
        };
        reduce(&mut slice, EntriesAction::Created(entry(42)));
        assert_eq!(slice.items[0].id, 42);
        assert_eq!(slice.items.len(), 3);
    }

    #[test]
    fn updated_replaces_by_id_and_ignores_unknown_ids() {
        let mut slice = EntriesSlice {
            items: collection(3),
            ..Default::default()
        };

        let mut renamed = entry(2);
        renamed.title = "Renamed".to_string();
        reduce(&mut slice, EntriesAction::Updated(renamed));
        assert_eq!(slice.items[1].title, "Renamed");

        reduce(&mut slice, EntriesAction::Updated(entry(99)));
        assert_eq!(slice.items.len(), 3);
    }

    #[test]
    fn delete_on_the_last_page_clamps_the_page() {
        // 11 items at 10 per page: page 2 holds one item. Deleting it must
        // pull the view back to page 1 rather than leave an empty page.
        let mut slice = EntriesSlice {
            items: collection(11),
            ..Default::default()
        };
        reduce(&mut slice, EntriesAction::PageChanged(2));

        reduce(&mut slice, EntriesAction::Deleted(11));
        assert_eq!(slice.items.len(), 10);
        assert_eq!(slice.query.current_page, 1);
    }

    #[test]
    fn search_and_page_size_changes_reset_the_page() {
        let mut slice = EntriesSlice {
            items: collection(30),
            ..Default::default()
        };
        reduce(&mut slice, EntriesAction::PageChanged(3));
        reduce(
            &mut slice,
            EntriesAction::SearchTermChanged("Post".to_string()),
        );
        assert_eq!(slice.query.current_page, 1);

        reduce(&mut slice, EntriesAction::PageChanged(2));
        reduce(&mut slice, EntriesAction::PageSizeChanged(5));
        assert_eq!(slice.query.current_page, 1);
        assert_eq!(slice.query.items_per_page, 5);
    }
}
