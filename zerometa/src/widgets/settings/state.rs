use super::model::{Language, SettingsData, ThemeChoice};

/// Baseline and draft settings for the settings widget.
#[derive(Debug)]
pub(crate) struct SettingsState {
    baseline: SettingsData,
    draft: SettingsData,
    dirty: bool,
}

impl SettingsState {
    pub(crate) fn from_settings(settings: SettingsData) -> Self {
        Self {
            baseline: settings,
            draft: settings,
            dirty: false,
        }
    }

    /// Return editable settings draft.
    pub(crate) fn draft(&self) -> &SettingsData {
        &self.draft
    }

    #[cfg(test)]
    pub(crate) fn baseline(&self) -> &SettingsData {
        &self.baseline
    }

    /// Return whether the draft differs from the baseline.
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_theme(&mut self, theme: ThemeChoice) {
        self.draft.set_theme(theme);
        self.update_dirty();
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.draft.set_language(language);
        self.update_dirty();
    }

    pub(crate) fn set_default_zoom(&mut self, zoom: u8) {
        self.draft.set_default_zoom(zoom);
        self.update_dirty();
    }

    /// Reset draft to baseline.
    pub(crate) fn reset(&mut self) {
        self.draft = self.baseline;
        self.dirty = false;
    }

    fn update_dirty(&mut self) {
        self.dirty = self.draft != self.baseline;
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::from_settings(SettingsData::default())
    }
}
