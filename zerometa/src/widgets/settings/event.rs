use super::model::{Language, ThemeChoice};

/// UI events emitted by the settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsEvent {
    ThemeSelected(ThemeChoice),
    LanguageSelected(Language),
    ZoomChanged(u8),
    /// Discard edits and restore the defaults.
    Reset,
}

/// Effect events produced by the settings reducer, routed outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsEffect {
    /// Request the app to switch to the given theme.
    ApplyTheme(ThemeChoice),
}
