use std::fmt;

pub(crate) const MIN_ZOOM: u8 = 1;
pub(crate) const MAX_ZOOM: u8 = 20;
pub(crate) const DEFAULT_ZOOM: u8 = 10;

/// Color scheme selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ThemeChoice {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeChoice {
    pub(crate) const ALL: [ThemeChoice; 3] =
        [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System];
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
            ThemeChoice::System => "System",
        };
        f.write_str(name)
    }
}

/// Language used for UI labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    pub(crate) const ALL: [Language; 2] = [Language::English, Language::Arabic];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::Arabic => "العربية",
        };
        f.write_str(name)
    }
}

/// General application settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SettingsData {
    theme: ThemeChoice,
    language: Language,
    default_zoom: u8,
}

impl SettingsData {
    pub(crate) fn theme(&self) -> ThemeChoice {
        self.theme
    }

    pub(crate) fn language(&self) -> Language {
        self.language
    }

    pub(crate) fn default_zoom(&self) -> u8 {
        self.default_zoom
    }

    pub(crate) fn set_theme(&mut self, theme: ThemeChoice) {
        self.theme = theme;
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Store the zoom level clamped to the supported range.
    pub(crate) fn set_default_zoom(&mut self, zoom: u8) {
        self.default_zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            language: Language::default(),
            default_zoom: DEFAULT_ZOOM,
        }
    }
}

/// Read-only view model for the settings page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsViewModel<'a> {
    pub(crate) data: &'a SettingsData,
    pub(crate) is_dirty: bool,
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, SettingsData};

    #[test]
    fn given_out_of_range_zoom_when_set_then_value_is_clamped() {
        let mut data = SettingsData::default();
        assert_eq!(data.default_zoom(), DEFAULT_ZOOM);

        data.set_default_zoom(0);
        assert_eq!(data.default_zoom(), MIN_ZOOM);

        data.set_default_zoom(42);
        assert_eq!(data.default_zoom(), MAX_ZOOM);
    }
}
