//! Dismissible console notifications with fixed auto-expiry.

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::domain::types::NotificationKind;

/// Most notifications a console keeps live at once; pushing past the cap
/// drops the oldest.
pub const MAX_LIVE: usize = 5;

impl NotificationKind {
    /// Auto-dismiss window: errors linger longer than the rest.
    pub fn display_for(self) -> Duration {
        match self {
            NotificationKind::Error => Duration::seconds(7),
            _ => Duration::seconds(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: OffsetDateTime,
    pub expires_at: OffsetDateTime,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>, now: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: now,
            expires_at: now + kind.display_for(),
        }
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_outlive_the_other_kinds() {
        assert_eq!(NotificationKind::Error.display_for(), Duration::seconds(7));
        for kind in [
            NotificationKind::Success,
            NotificationKind::Info,
            NotificationKind::Warning,
        ] {
            assert_eq!(kind.display_for(), Duration::seconds(5));
        }
    }

    #[test]
    fn expiry_tracks_the_kind_window() {
        let now = OffsetDateTime::now_utc();
        let toast = Notification::new(NotificationKind::Success, "Saved", now);

        assert!(!toast.is_expired(now));
        assert!(!toast.is_expired(now + Duration::seconds(4)));
        assert!(toast.is_expired(now + Duration::seconds(5)));
    }
}
