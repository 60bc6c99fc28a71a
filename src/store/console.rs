//! The console facade: the action boundary UI events call into.
//!
//! Owns the store, the services, and the client storage. Every action
//! traps typed errors into slice display state plus a notification — an
//! error never escapes to the caller's render path.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::application::auth::{AuthService, Credentials};
use crate::application::enrich::Enricher;
use crate::application::entries::{EntryDraft, EntryPatch, EntryService};
use crate::application::error::AppError;
use crate::application::notifications::Notification;
use crate::application::query::{PageView, QueryState};
use crate::application::users::UserService;
use crate::cache::{CacheTuning, ResponseCache};
use crate::config::Settings;
use crate::domain::entities::{EntryRecord, UserRecord};
use crate::domain::types::{NotificationKind, ThemeMode};
use crate::infra::http::Transport;
use crate::infra::storage::{ClientStorage, keys as storage_keys};

use super::{
    Action, AuthAction, EntriesAction, NotificationsAction, Store, ThemeAction, UsersAction,
};

pub struct Console {
    store: Arc<Store>,
    entries: EntryService,
    users: UserService,
    auth: AuthService,
    storage: Arc<dyn ClientStorage>,
}

impl Console {
    /// Wire the full stack from settings: storage → transport → cache →
    /// services → store. The persisted theme is picked up here so the
    /// first render already matches the last session.
    pub fn new(settings: &Settings, storage: Arc<dyn ClientStorage>) -> Result<Self, AppError> {
        let transport = Arc::new(Transport::new(&settings.api, storage.clone())?);
        let cache = Arc::new(ResponseCache::new(&CacheTuning::from(&settings.cache)));
        let enricher = Arc::new(Enricher::from_entropy());

        let entries = EntryService::new(transport.clone(), cache.clone(), enricher.clone());
        let users = UserService::new(transport, cache, enricher);
        let auth = AuthService::new(storage.clone());

        let theme = storage
            .get(storage_keys::THEME)
            .and_then(|raw| ThemeMode::try_from(raw.as_str()).ok())
            .unwrap_or(ThemeMode::Light);
        let query = QueryState::with_page_size(settings.pagination.default_page_size);
        let store = Arc::new(Store::new(theme, query));

        Ok(Self {
            store,
            entries,
            users,
            auth,
            storage,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    pub async fn fetch_entries(&self) {
        self.store
            .dispatch(Action::Entries(EntriesAction::FetchStarted));
        let seq = self.store.entries_slice().fetch_seq;

        match self.entries.list().await {
            Ok(items) => {
                self.store
                    .dispatch(Action::Entries(EntriesAction::FetchSucceeded { seq, items }));
            }
            Err(err) => {
                let message = err.user_message();
                self.store
                    .dispatch(Action::Entries(EntriesAction::FetchFailed {
                        seq,
                        message: message.clone(),
                    }));
                self.notify(NotificationKind::Error, message);
            }
        }
    }

    pub fn create_entry(&self, draft: EntryDraft) {
        match self.entries.create(draft) {
            Ok(record) => {
                info!(id = record.id, "entry created");
                self.store
                    .dispatch(Action::Entries(EntriesAction::Created(record)));
                self.notify(NotificationKind::Success, "Entry created successfully");
            }
            Err(err) => self.notify(NotificationKind::Error, err.user_message()),
        }
    }

    pub fn update_entry(&self, id: u64, patch: EntryPatch) {
        let existing = self
            .store
            .entries_slice()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned();

        match existing {
            Some(existing) => {
                let updated = self.entries.update(&existing, patch);
                self.store
                    .dispatch(Action::Entries(EntriesAction::Updated(updated)));
                self.notify(NotificationKind::Success, "Entry updated successfully");
            }
            None => {
                self.notify(
                    NotificationKind::Error,
                    AppError::not_found("entry").user_message(),
                );
            }
        }
    }

    pub fn delete_entry(&self, id: u64) {
        let receipt = self.entries.delete(id);
        if receipt.deleted {
            self.store
                .dispatch(Action::Entries(EntriesAction::Deleted(receipt.id)));
            self.notify(NotificationKind::Success, "Entry deleted successfully");
        }
    }

    pub fn set_entries_search(&self, term: impl Into<String>) {
        self.store
            .dispatch(Action::Entries(EntriesAction::SearchTermChanged(
                term.into(),
            )));
    }

    pub fn set_entries_page(&self, page: usize) {
        self.store
            .dispatch(Action::Entries(EntriesAction::PageChanged(page)));
    }

    pub fn set_entries_page_size(&self, size: usize) {
        self.store
            .dispatch(Action::Entries(EntriesAction::PageSizeChanged(size)));
    }

    /// The derived visible page.
    pub fn visible_entries(&self) -> PageView<EntryRecord> {
        self.store.entries_page()
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub async fn fetch_users(&self) {
        self.store.dispatch(Action::Users(UsersAction::FetchStarted));
        let seq = self.store.users_slice().fetch_seq;

        match self.users.list().await {
            Ok(items) => {
                self.store
                    .dispatch(Action::Users(UsersAction::FetchSucceeded { seq, items }));
            }
            Err(err) => {
                let message = err.user_message();
                self.store.dispatch(Action::Users(UsersAction::FetchFailed {
                    seq,
                    message: message.clone(),
                }));
                self.notify(NotificationKind::Error, message);
            }
        }
    }

    pub fn set_users_search(&self, term: impl Into<String>) {
        self.store
            .dispatch(Action::Users(UsersAction::SearchTermChanged(term.into())));
    }

    pub fn set_users_page(&self, page: usize) {
        self.store
            .dispatch(Action::Users(UsersAction::PageChanged(page)));
    }

    pub fn set_users_page_size(&self, size: usize) {
        self.store
            .dispatch(Action::Users(UsersAction::PageSizeChanged(size)));
    }

    pub fn visible_users(&self) -> PageView<UserRecord> {
        self.store.users_page()
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub fn login(&self, credentials: Credentials) {
        self.store.dispatch(Action::Auth(AuthAction::LoginStarted));
        match self.auth.login(&credentials) {
            Ok(session) => {
                info!(email = %session.user.email, "login succeeded");
                self.store
                    .dispatch(Action::Auth(AuthAction::LoginSucceeded(session)));
            }
            Err(err) => {
                self.store
                    .dispatch(Action::Auth(AuthAction::LoginFailed(err.user_message())));
            }
        }
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.store.dispatch(Action::Auth(AuthAction::LoggedOut));
    }

    /// Startup path: adopt a persisted session when it is still valid;
    /// otherwise stay anonymous without surfacing anything.
    pub fn restore_session(&self) {
        if let Some(session) = self.auth.restore() {
            self.store
                .dispatch(Action::Auth(AuthAction::SessionRestored(session)));
        }
    }

    // ------------------------------------------------------------------
    // Notifications and theme
    // ------------------------------------------------------------------

    pub fn dismiss_notification(&self, id: Uuid) {
        self.store
            .dispatch(Action::Notifications(NotificationsAction::Dismissed(id)));
    }

    /// Prune expired notifications; the embedding shell calls this on its
    /// own tick.
    pub fn sweep_notifications(&self) {
        self.store
            .dispatch(Action::Notifications(NotificationsAction::Swept {
                now: OffsetDateTime::now_utc(),
            }));
    }

    pub fn toggle_theme(&self) {
        self.store.dispatch(Action::Theme(ThemeAction::Toggled));
        let mode = self.store.theme_mode();
        self.storage.set(storage_keys::THEME, mode.as_str());
    }

    fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.store
            .dispatch(Action::Notifications(NotificationsAction::Pushed(
                Notification::new(kind, message, OffsetDateTime::now_utc()),
            )));
    }
}
