use iced::widget::{
    Column, Row, Space, button, column, container, row, scrollable,
};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::i18n::{self, Label};
use crate::shared::ui::icons;
use crate::shared::ui::style::{self, label};
use crate::shared::ui::theme::{ThemeProps, UiPalette};
use crate::widgets::catalog::Layer;
use crate::widgets::navigation::NavigationEvent;
use crate::widgets::navigation::model::PinnedLayerSet;
use crate::widgets::settings::model::Language;

const PAGE_PADDING: f32 = 24.0;
const HEADER_FONT_SIZE: f32 = 22.0;
const HEADER_SPACING: f32 = 16.0;
const GRID_SPACING: f32 = 12.0;
const CELL_PADDING: f32 = 16.0;
const CELL_SPACING: f32 = 8.0;
const CELL_ICON_SIZE: f32 = 32.0;
const CELL_FONT_SIZE: f32 = 14.0;
const PIN_FONT_SIZE: f32 = 12.0;

/// Props for the layers grid page.
pub(crate) struct LayersGridProps<'a> {
    pub(crate) grid: &'a [Layer],
    pub(crate) pinned: &'a PinnedLayerSet,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) language: Language,
    pub(crate) columns: usize,
}

/// Render one cell per layer, in catalog order.
pub(crate) fn view(
    props: LayersGridProps<'_>,
) -> Element<'_, NavigationEvent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();
    let columns = props.columns.max(1);

    let header =
        label(i18n::text(props.language, Label::AvailableLayers))
            .size(HEADER_FONT_SIZE);

    let mut rows = Column::new().spacing(GRID_SPACING).width(Length::Fill);
    for chunk in props.grid.chunks(columns) {
        let mut cells = Row::new().spacing(GRID_SPACING).width(Length::Fill);
        for layer in chunk {
            let is_pinned = props.pinned.contains(&layer.id);
            cells = cells.push(layer_cell(
                layer,
                is_pinned,
                props.language,
                palette,
            ));
        }
        for _ in chunk.len()..columns {
            cells = cells.push(Space::new().width(Length::Fill));
        }
        rows = rows.push(cells);
    }

    let content = column![header, rows]
        .spacing(HEADER_SPACING)
        .padding(PAGE_PADDING)
        .width(Length::Fill);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn layer_cell<'a>(
    layer: &'a Layer,
    is_pinned: bool,
    language: Language,
    palette: UiPalette,
) -> Element<'a, NavigationEvent, Theme, iced::Renderer> {
    let (pin_glyph, pin_label) = if is_pinned {
        (icons::UNPIN, Label::Unpin)
    } else {
        (icons::PIN, Label::Pin)
    };

    let pin_content = row![
        label(pin_glyph).size(PIN_FONT_SIZE),
        label(i18n::text(language, pin_label)).size(PIN_FONT_SIZE),
    ]
    .spacing(4)
    .align_y(alignment::Vertical::Center);

    let pinned_style = style::primary_button_style(palette);
    let unpinned_style = style::secondary_button_style(palette);

    // The inner pin button captures its press, so the cell never sees it.
    let pin_button = button(pin_content)
        .on_press(NavigationEvent::PinPressed {
            layer_id: layer.id.clone(),
        })
        .padding([4.0, 8.0])
        .style(move |theme, status| {
            if is_pinned {
                pinned_style(theme, status)
            } else {
                unpinned_style(theme, status)
            }
        });

    let body = column![
        label(icons::layer_glyph(&layer.icon)).size(CELL_ICON_SIZE),
        label(layer.name.as_str()).size(CELL_FONT_SIZE),
        pin_button,
    ]
    .spacing(CELL_SPACING)
    .align_x(alignment::Horizontal::Center)
    .width(Length::Fill);

    let card = container(body)
        .width(Length::Fill)
        .padding(CELL_PADDING)
        .style(style::card_style(palette));

    button(card)
        .on_press(NavigationEvent::LayerPressed {
            layer_id: layer.id.clone(),
        })
        .padding(0)
        .width(Length::Fill)
        .style(|_, _| button::Style {
            background: None,
            ..Default::default()
        })
        .into()
}
