use iced::widget::{
    Column, Space, button, container, row, scrollable, tooltip,
};
use iced::{Border, Color, Element, Length, Theme, alignment};

use crate::shared::ui::i18n::{self, Label};
use crate::shared::ui::icons;
use crate::shared::ui::style::label;
use crate::shared::ui::theme::{ThemeProps, UiPalette};
use crate::widgets::navigation::NavigationEvent;
use crate::widgets::navigation::model::{PinnedLayerSet, SidebarEntry};
use crate::widgets::settings::model::Language;

pub(crate) const SIDEBAR_RAIL_WIDTH: f32 = 56.0;
const RAIL_BUTTON_SIZE: f32 = 48.0;
const RAIL_ICON_SIZE: f32 = 20.0;
const LOGO_HEIGHT: f32 = 56.0;
const LOGO_FONT_SIZE: f32 = 16.0;
const ACTIVE_BORDER_WIDTH: f32 = 3.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 6.0;
const TOOLTIP_GAP: f32 = 4.0;

/// Props for the primary sidebar rail.
pub(crate) struct SidebarRailProps<'a> {
    pub(crate) entries: Vec<SidebarEntry>,
    pub(crate) active_entry: SidebarEntry,
    pub(crate) pinned: &'a PinnedLayerSet,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) language: Language,
}

/// Render the always-visible icon rail with its tooltips.
pub(crate) fn view(
    props: SidebarRailProps<'_>,
) -> Element<'_, NavigationEvent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();

    let logo = container(label(icons::LOGO).size(LOGO_FONT_SIZE))
        .width(Length::Fill)
        .height(Length::Fixed(LOGO_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            text_color: Some(palette.accent),
            ..Default::default()
        });

    let mut items = Column::new().push(logo).width(Length::Fill);
    for entry in &props.entries {
        if let Some(item) = entry_button(entry, &props, palette) {
            items = items.push(item);
        }
    }

    let scroll = scrollable::Scrollable::with_direction(
        items,
        scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    container(scroll)
        .width(Length::Fixed(SIDEBAR_RAIL_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.rail.into()),
            ..Default::default()
        })
        .into()
}

fn entry_button<'a>(
    entry: &SidebarEntry,
    props: &SidebarRailProps<'a>,
    palette: UiPalette,
) -> Option<Element<'a, NavigationEvent, Theme, iced::Renderer>> {
    let is_active = *entry == props.active_entry;
    let caption = |key: Label| String::from(i18n::text(props.language, key));

    let item = match entry {
        SidebarEntry::Home => rail_button(
            icons::HOME,
            caption(Label::Home),
            is_active,
            palette,
            NavigationEvent::HomePressed,
        ),
        SidebarEntry::Layers => rail_button(
            icons::LAYERS,
            caption(Label::Layers),
            is_active,
            palette,
            NavigationEvent::LayersPressed,
        ),
        SidebarEntry::Pinned(id) => {
            let layer = props.pinned.get(id)?;
            rail_button(
                icons::layer_glyph(&layer.icon),
                layer.name.clone(),
                is_active,
                palette,
                NavigationEvent::PinnedPressed {
                    layer_id: layer.id.clone(),
                },
            )
        },
        SidebarEntry::Settings => rail_button(
            icons::SETTINGS,
            caption(Label::Settings),
            is_active,
            palette,
            NavigationEvent::SettingsPressed,
        ),
        SidebarEntry::Support => rail_button(
            icons::SUPPORT,
            caption(Label::Support),
            is_active,
            palette,
            NavigationEvent::SupportPressed,
        ),
    };

    Some(item)
}

fn rail_button<'a>(
    glyph: &'static str,
    caption: String,
    is_active: bool,
    palette: UiPalette,
    on_press: NavigationEvent,
) -> Element<'a, NavigationEvent, Theme, iced::Renderer> {
    let icon = container(label(glyph).size(RAIL_ICON_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let border_color = if is_active {
        palette.accent
    } else {
        Color::TRANSPARENT
    };

    let border_strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(border_color.into()),
            ..Default::default()
        });

    let content = row![border_strip, icon]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let rail_button = button(content)
        .on_press(on_press)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(RAIL_BUTTON_SIZE))
        .style(move |_, status| {
            let text_color = if is_active {
                palette.accent
            } else if status == button::Status::Hovered {
                palette.on_accent
            } else {
                palette.dim_foreground
            };

            button::Style {
                background: None,
                text_color,
                border: Border::default(),
                ..Default::default()
            }
        });

    let tip = container(label(caption).size(TOOLTIP_FONT_SIZE))
        .padding(TOOLTIP_PADDING)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

    tooltip(rail_button, tip, tooltip::Position::Right)
        .gap(TOOLTIP_GAP)
        .into()
}
