//! Theme slice and reducer. Persistence of the chosen mode is a side
//! effect handled at the console boundary, not here.

use crate::domain::types::ThemeMode;

#[derive(Debug, Clone)]
pub struct ThemeSlice {
    pub mode: ThemeMode,
}

impl Default for ThemeSlice {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
        }
    }
}

#[derive(Debug)]
pub enum ThemeAction {
    Toggled,
    Set(ThemeMode),
}

pub(super) fn reduce(slice: &mut ThemeSlice, action: ThemeAction) {
    match action {
        ThemeAction::Toggled => slice.mode = slice.mode.toggled(),
        ThemeAction::Set(mode) => slice.mode = mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_set_update_the_mode() {
        let mut slice = ThemeSlice::default();
        reduce(&mut slice, ThemeAction::Toggled);
        assert_eq!(slice.mode, ThemeMode::Dark);

        reduce(&mut slice, ThemeAction::Set(ThemeMode::Light));
        assert_eq!(slice.mode, ThemeMode::Light);
    }
}
