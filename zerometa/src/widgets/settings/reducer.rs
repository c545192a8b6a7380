use iced::Task;

use super::event::{SettingsEffect, SettingsEvent};
use super::state::SettingsState;

/// Reduce a settings event into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut SettingsState,
    event: SettingsEvent,
) -> Task<SettingsEffect> {
    match event {
        SettingsEvent::ThemeSelected(theme) => {
            state.set_theme(theme);
            Task::done(SettingsEffect::ApplyTheme(theme))
        },
        SettingsEvent::LanguageSelected(language) => {
            log::debug!("ui language set to {language:?}");
            state.set_language(language);
            Task::none()
        },
        SettingsEvent::ZoomChanged(zoom) => {
            state.set_default_zoom(zoom);
            Task::none()
        },
        SettingsEvent::Reset => {
            state.reset();
            Task::done(SettingsEffect::ApplyTheme(state.draft().theme()))
        },
    }
}
