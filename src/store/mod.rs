//! Centralized console state.
//!
//! One slice per concern — entries, users, auth, notifications, theme —
//! each mutated only by its pure reducer behind `Store::dispatch`. The
//! store is an explicit value handed around by reference, not a global;
//! async orchestration lives on [`Console`], which calls the services and
//! dispatches their results back in. That keeps the single-writer
//! invariant while making every reducer unit-testable.

mod auth;
mod console;
mod entries;
mod notifications;
mod theme;
mod users;

use std::sync::RwLock;

pub use auth::{AuthAction, AuthPhase, AuthSlice};
pub use console::Console;
pub use entries::{EntriesAction, EntriesSlice};
pub use notifications::{NotificationsAction, NotificationsSlice};
pub use theme::{ThemeAction, ThemeSlice};
pub use users::{UsersAction, UsersSlice};

use crate::application::notifications::Notification;
use crate::application::query::{self, PageView, QueryState};
use crate::cache::lock::{rw_read, rw_write};
use crate::domain::entities::{EntryRecord, UserRecord};
use crate::domain::types::ThemeMode;

/// Every mutation the store accepts.
#[derive(Debug)]
pub enum Action {
    Entries(EntriesAction),
    Users(UsersAction),
    Auth(AuthAction),
    Notifications(NotificationsAction),
    Theme(ThemeAction),
}

pub struct Store {
    entries: RwLock<EntriesSlice>,
    users: RwLock<UsersSlice>,
    auth: RwLock<AuthSlice>,
    notifications: RwLock<NotificationsSlice>,
    theme: RwLock<ThemeSlice>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ThemeMode::Light, QueryState::default())
    }
}

impl Store {
    pub fn new(theme: ThemeMode, query: QueryState) -> Self {
        Self {
            entries: RwLock::new(EntriesSlice::with_query(query.clone())),
            users: RwLock::new(UsersSlice::with_query(query)),
            auth: RwLock::new(AuthSlice::default()),
            notifications: RwLock::new(NotificationsSlice::default()),
            theme: RwLock::new(ThemeSlice { mode: theme }),
        }
    }

    /// The only mutation path. Each arm runs one pure reducer to
    /// completion before the next dispatch begins.
    pub fn dispatch(&self, action: Action) {
        match action {
            Action::Entries(action) => {
                entries::reduce(&mut rw_write(&self.entries, "store.entries"), action);
            }
            Action::Users(action) => {
                users::reduce(&mut rw_write(&self.users, "store.users"), action);
            }
            Action::Auth(action) => {
                auth::reduce(&mut rw_write(&self.auth, "store.auth"), action);
            }
            Action::Notifications(action) => notifications::reduce(
                &mut rw_write(&self.notifications, "store.notifications"),
                action,
            ),
            Action::Theme(action) => {
                theme::reduce(&mut rw_write(&self.theme, "store.theme"), action);
            }
        }
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    pub fn entries_slice(&self) -> EntriesSlice {
        rw_read(&self.entries, "store.entries").clone()
    }

    pub fn users_slice(&self) -> UsersSlice {
        rw_read(&self.users, "store.users").clone()
    }

    pub fn auth_slice(&self) -> AuthSlice {
        rw_read(&self.auth, "store.auth").clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        rw_read(&self.notifications, "store.notifications")
            .notifications
            .clone()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        rw_read(&self.theme, "store.theme").mode
    }

    /// The visible entries page, derived through the query pipeline.
    pub fn entries_page(&self) -> PageView<EntryRecord> {
        let slice = rw_read(&self.entries, "store.entries");
        query::run(&slice.items, &slice.query)
    }

    /// The visible users page, derived through the query pipeline.
    pub fn users_page(&self) -> PageView<UserRecord> {
        let slice = rw_read(&self.users, "store.users");
        query::run(&slice.items, &slice.query)
    }
}
