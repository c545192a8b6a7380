use iced::widget::{Text, button, container, text};
use iced::{Background, Border, Theme};

use super::theme::UiPalette;

pub(crate) const CORNER_RADIUS: f32 = 6.0;

/// Text with advanced shaping so Arabic labels and glyph icons render.
pub(crate) fn label<'a>(
    content: impl text::IntoFragment<'a>,
) -> Text<'a, Theme, iced::Renderer> {
    text(content).shaping(text::Shaping::Advanced)
}

/// Card surface used by grid cells and support options.
pub(crate) fn card_style(
    palette: UiPalette,
) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: CORNER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Filled accent button. Disabled buttons are drawn with dimmed colors.
pub(crate) fn primary_button_style(
    palette: UiPalette,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                palette.accent_hover
            },
            button::Status::Disabled => palette.border,
            button::Status::Active => palette.accent,
        };
        let text_color = match status {
            button::Status::Disabled => palette.dim_foreground,
            _ => palette.on_accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: CORNER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Outlined button on a surface background.
pub(crate) fn secondary_button_style(
    palette: UiPalette,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette.accent,
            _ => palette.border,
        };
        let text_color = match status {
            button::Status::Disabled => palette.dim_foreground,
            _ => palette.foreground,
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: CORNER_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}
