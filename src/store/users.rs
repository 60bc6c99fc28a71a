//! Users slice and reducer. Read-only collection: no mutation actions.

use crate::application::query::{self, QueryState};
use crate::domain::entities::UserRecord;

#[derive(Debug, Clone, Default)]
pub struct UsersSlice {
    pub items: Vec<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: QueryState,
    /// Sequence of the newest fetch issued; older completions are ignored.
    pub fetch_seq: u64,
}

impl UsersSlice {
    pub fn with_query(query: QueryState) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }
}

#[derive(Debug)]
pub enum UsersAction {
    FetchStarted,
    FetchSucceeded { seq: u64, items: Vec<UserRecord> },
    FetchFailed { seq: u64, message: String },
    SearchTermChanged(String),
    PageChanged(usize),
    PageSizeChanged(usize),
    ErrorCleared,
}

pub(super) fn reduce(slice: &mut UsersSlice, action: UsersAction) {
    match action {
        UsersAction::FetchStarted => {
            slice.fetch_seq += 1;
            slice.loading = true;
            slice.error = None;
        }
        UsersAction::FetchSucceeded { seq, items } => {
            if seq != slice.fetch_seq {
                return;
            }
            slice.loading = false;
            slice.items = items;
            clamp(slice);
        }
        UsersAction::FetchFailed { seq, message } => {
            if seq != slice.fetch_seq {
                return;
            }
            slice.loading = false;
            slice.error = Some(message);
        }
        UsersAction::SearchTermChanged(term) => {
            slice.query.set_search_term(term);
        }
        UsersAction::PageChanged(page) => {
            slice.query.set_current_page(page);
            clamp(slice);
        }
        UsersAction::PageSizeChanged(size) => {
            slice.query.set_items_per_page(size);
        }
        UsersAction::ErrorCleared => {
            slice.error = None;
        }
    }
}

fn clamp(slice: &mut UsersSlice) {
    let filtered = query::filter(&slice.items, &slice.query.search_term).len();
    slice.query.clamp_to(filtered);
}
