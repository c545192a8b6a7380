mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SettingsEffect, SettingsEvent};
use iced::Task;
use model::{Language, SettingsViewModel, ThemeChoice};
use state::SettingsState;

/// Settings widget: theme, UI language and default map zoom, edited
/// against a baseline for the lifetime of the process.
pub(crate) struct SettingsWidget {
    state: SettingsState,
}

impl SettingsWidget {
    /// Create a new widget with default settings.
    pub(crate) fn new() -> Self {
        Self {
            state: SettingsState::default(),
        }
    }

    /// Reduce an event into state updates and effects.
    pub(crate) fn reduce(&mut self, event: SettingsEvent) -> Task<SettingsEffect> {
        reducer::reduce(&mut self.state, event)
    }

    /// Return a read-only view model for the settings page.
    pub(crate) fn vm(&self) -> SettingsViewModel<'_> {
        SettingsViewModel {
            data: self.state.draft(),
            is_dirty: self.state.is_dirty(),
        }
    }

    pub(crate) fn theme(&self) -> ThemeChoice {
        self.state.draft().theme()
    }

    pub(crate) fn language(&self) -> Language {
        self.state.draft().language()
    }
}
