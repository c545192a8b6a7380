use iced::theme::Palette;
use iced::{Color, Theme};

use crate::widgets::settings::model::ThemeChoice;

/// Resolved colors used by every view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UiPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) panel: Color,
    pub(crate) rail: Color,
    pub(crate) border: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) accent_hover: Color,
    pub(crate) on_accent: Color,
    pub(crate) danger: Color,
    pub(crate) scrim: Color,
}

impl UiPalette {
    fn light() -> Self {
        Self {
            background: Color::from_rgb8(0xF5, 0xF7, 0xFA),
            surface: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            panel: Color::from_rgb8(0xF3, 0xF4, 0xF6),
            rail: Color::from_rgb8(0x1F, 0x29, 0x37),
            border: Color::from_rgb8(0xD1, 0xD5, 0xDB),
            foreground: Color::from_rgb8(0x1F, 0x29, 0x37),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            accent: Color::from_rgb8(0x4F, 0x46, 0xE5),
            accent_hover: Color::from_rgb8(0x43, 0x38, 0xCA),
            on_accent: Color::WHITE,
            danger: Color::from_rgb8(0xE0, 0x6C, 0x75),
            scrim: Color::from_rgba8(0x00, 0x00, 0x00, 0.5),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x16, 0x18, 0x22),
            surface: Color::from_rgb8(0x23, 0x25, 0x30),
            panel: Color::from_rgb8(0x1F, 0x29, 0x37),
            rail: Color::from_rgb8(0x0F, 0x11, 0x15),
            border: Color::from_rgb8(0x37, 0x41, 0x51),
            foreground: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            dim_foreground: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            accent: Color::from_rgb8(0x4F, 0x46, 0xE5),
            accent_hover: Color::from_rgb8(0x63, 0x5B, 0xF0),
            on_accent: Color::WHITE,
            danger: Color::from_rgb8(0xE0, 0x6C, 0x75),
            scrim: Color::from_rgba8(0x00, 0x00, 0x00, 0.5),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    choice: ThemeChoice,
    palette: UiPalette,
}

impl AppTheme {
    /// Resolve a user theme choice. `System` follows the dark palette.
    pub(crate) fn from_choice(choice: ThemeChoice) -> Self {
        let palette = match choice {
            ThemeChoice::Light => UiPalette::light(),
            ThemeChoice::Dark | ThemeChoice::System => UiPalette::dark(),
        };
        Self { choice, palette }
    }

    pub(crate) fn choice(&self) -> ThemeChoice {
        self.choice
    }

    pub(crate) fn palette(&self) -> &UiPalette {
        &self.palette
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(self)
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: Color::from_rgb8(0x98, 0xC3, 0x79),
            danger: palette.danger,
            warning: Color::from_rgb8(0xE5, 0xC0, 0x7B),
        };

        Theme::custom(format!("zerometa-{}", value.choice), palette)
    }
}

/// Theme props passed through App -> Page -> Widget view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }

    pub(crate) fn palette(&self) -> &'a UiPalette {
        self.theme.palette()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppTheme, UiPalette};
    use crate::widgets::settings::model::ThemeChoice;

    #[test]
    fn given_system_choice_when_resolved_then_uses_dark_palette() {
        let theme = AppTheme::from_choice(ThemeChoice::System);

        assert_eq!(theme.choice(), ThemeChoice::System);
        assert_eq!(theme.palette(), &UiPalette::dark());
    }

    #[test]
    fn given_light_choice_when_resolved_then_palette_differs_from_dark() {
        let light = AppTheme::from_choice(ThemeChoice::Light);
        let dark = AppTheme::from_choice(ThemeChoice::Dark);

        assert_ne!(light.palette().background, dark.palette().background);
    }

    #[test]
    fn given_default_choice_when_resolved_then_uses_dark_palette() {
        let theme = AppTheme::from_choice(ThemeChoice::default());

        assert_eq!(theme.choice(), ThemeChoice::Dark);
        assert_eq!(theme.palette(), &UiPalette::dark());
    }
}
