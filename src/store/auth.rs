//! Auth slice and reducer.
//!
//! Legal transitions only: anonymous → authenticating → authenticated,
//! and anything → anonymous on logout. Actions arriving in the wrong
//! phase are dropped rather than corrupting the state machine.

use crate::application::auth::{Session, SessionUser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Debug, Clone, Default)]
pub struct AuthSlice {
    pub phase: AuthPhase,
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub error: Option<String>,
}

impl AuthSlice {
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }
}

#[derive(Debug)]
pub enum AuthAction {
    LoginStarted,
    LoginSucceeded(Session),
    LoginFailed(String),
    SessionRestored(Session),
    LoggedOut,
    ErrorCleared,
}

pub(super) fn reduce(slice: &mut AuthSlice, action: AuthAction) {
    match action {
        AuthAction::LoginStarted => {
            if slice.phase != AuthPhase::Anonymous {
                return;
            }
            slice.phase = AuthPhase::Authenticating;
            slice.error = None;
        }
        AuthAction::LoginSucceeded(session) => {
            if slice.phase != AuthPhase::Authenticating {
                return;
            }
            apply_session(slice, session);
        }
        AuthAction::LoginFailed(message) => {
            if slice.phase != AuthPhase::Authenticating {
                return;
            }
            slice.phase = AuthPhase::Anonymous;
            slice.user = None;
            slice.token = None;
            slice.error = Some(message);
        }
        AuthAction::SessionRestored(session) => {
            if slice.phase != AuthPhase::Anonymous {
                return;
            }
            apply_session(slice, session);
        }
        AuthAction::LoggedOut => {
            slice.phase = AuthPhase::Anonymous;
            slice.user = None;
            slice.token = None;
            slice.error = None;
        }
        AuthAction::ErrorCleared => {
            slice.error = None;
        }
    }
}

fn apply_session(slice: &mut AuthSlice, session: Session) {
    slice.phase = AuthPhase::Authenticated;
    slice.user = Some(session.user);
    slice.token = Some(session.token);
    slice.error = None;
}
