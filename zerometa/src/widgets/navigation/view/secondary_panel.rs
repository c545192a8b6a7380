use iced::widget::{Space, button, column, container, row, scrollable};
use iced::{Border, Element, Length, Theme, alignment};

use crate::shared::ui::i18n::{self, Label};
use crate::shared::ui::icons;
use crate::shared::ui::style::{self, label};
use crate::shared::ui::theme::{ThemeProps, UiPalette};
use crate::widgets::catalog::Layer;
use crate::widgets::navigation::NavigationEvent;
use crate::widgets::settings::model::Language;

pub(crate) const SECONDARY_PANEL_WIDTH: f32 = 280.0;
const HEADER_HEIGHT: f32 = 48.0;
const HEADER_PADDING_X: f32 = 16.0;
const HEADER_FONT_SIZE: f32 = 16.0;
const CLOSE_BUTTON_SIZE: f32 = 28.0;
const BODY_PADDING: f32 = 16.0;
const BODY_SPACING: f32 = 12.0;
const PREVIEW_ICON_SIZE: f32 = 48.0;
const DETAILS_FONT_SIZE: f32 = 13.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const ACTION_SPACING: f32 = 8.0;

/// Props for the secondary panel.
pub(crate) struct SecondaryPanelProps<'a> {
    pub(crate) selected_layer: Option<&'a Layer>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) language: Language,
}

/// Render the details panel for the selected layer.
pub(crate) fn view(
    props: SecondaryPanelProps<'_>,
) -> Element<'_, NavigationEvent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();

    let title = match props.selected_layer {
        Some(layer) => layer.name.clone(),
        None => String::from(i18n::text(props.language, Label::LayersStore)),
    };

    let body = match props.selected_layer {
        Some(layer) => layer_details(layer, props.language, palette),
        None => label(i18n::text(props.language, Label::LayersStoreHint))
            .size(DETAILS_FONT_SIZE)
            .color(palette.dim_foreground)
            .into(),
    };

    let content = column![
        panel_header(title, palette),
        scrollable(container(body).padding(BODY_PADDING).width(Length::Fill))
            .height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    container(content)
        .width(Length::Fixed(SECONDARY_PANEL_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.panel.into()),
            text_color: Some(palette.foreground),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn panel_header<'a>(
    title: String,
    palette: UiPalette,
) -> Element<'a, NavigationEvent, Theme, iced::Renderer> {
    let close_button = button(
        container(label(icons::CLOSE))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(NavigationEvent::ClosePanelPressed)
    .padding(0)
    .width(Length::Fixed(CLOSE_BUTTON_SIZE))
    .height(Length::Fixed(CLOSE_BUTTON_SIZE))
    .style(style::secondary_button_style(palette));

    let header = row![
        label(title).size(HEADER_FONT_SIZE),
        Space::new().width(Length::Fill),
        close_button,
    ]
    .align_y(alignment::Vertical::Center);

    container(header)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn layer_details<'a>(
    layer: &'a Layer,
    language: Language,
    palette: UiPalette,
) -> Element<'a, NavigationEvent, Theme, iced::Renderer> {
    let preview = container(
        label(icons::layer_glyph(&layer.icon)).size(PREVIEW_ICON_SIZE),
    )
    .width(Length::Fill)
    .padding(BODY_PADDING)
    .align_x(alignment::Horizontal::Center)
    .style(style::card_style(palette));

    // Layer actions are not wired yet; buttons without a handler render
    // disabled.
    let actions = row![
        button(label(i18n::text(language, Label::Preview)))
            .style(style::primary_button_style(palette)),
        button(label(i18n::text(language, Label::Settings)))
            .style(style::secondary_button_style(palette)),
    ]
    .spacing(ACTION_SPACING);

    column![
        preview,
        label(i18n::layer_heading(language, &layer.name)).size(TITLE_FONT_SIZE),
        label(i18n::text(language, Label::LayerDetailsBody))
            .size(DETAILS_FONT_SIZE)
            .color(palette.dim_foreground),
        actions,
    ]
    .spacing(BODY_SPACING)
    .width(Length::Fill)
    .into()
}
