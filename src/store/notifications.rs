//! Notifications slice and reducer.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::notifications::{MAX_LIVE, Notification};

#[derive(Debug, Clone, Default)]
pub struct NotificationsSlice {
    pub notifications: Vec<Notification>,
}

#[derive(Debug)]
pub enum NotificationsAction {
    Pushed(Notification),
    Dismissed(Uuid),
    /// Drop every notification whose display window has elapsed.
    Swept { now: OffsetDateTime },
    Cleared,
}

pub(super) fn reduce(slice: &mut NotificationsSlice, action: NotificationsAction) {
    match action {
        NotificationsAction::Pushed(notification) => {
            slice.notifications.push(notification);
            while slice.notifications.len() > MAX_LIVE {
                slice.notifications.remove(0);
            }
        }
        NotificationsAction::Dismissed(id) => {
            slice
                .notifications
                .retain(|notification| notification.id != id);
        }
        NotificationsAction::Swept { now } => {
            slice
                .notifications
                .retain(|notification| !notification.is_expired(now));
        }
        NotificationsAction::Cleared => {
            slice.notifications.clear();
        }
    }
}
