use iced::widget::{
    Column, button, column, container, pick_list, row, scrollable, slider,
    text,
};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::i18n::{self, Label};
use crate::shared::ui::style::{self, label};
use crate::shared::ui::theme::{ThemeProps, UiPalette};
use crate::widgets::settings::event::SettingsEvent;
use crate::widgets::settings::model::{
    Language, MAX_ZOOM, MIN_ZOOM, SettingsViewModel, ThemeChoice,
};

const PAGE_PADDING: f32 = 24.0;
const PAGE_TITLE_SIZE: f32 = 22.0;
const SECTION_SPACING: f32 = 16.0;
const SECTION_PADDING: f32 = 16.0;
const SECTION_TITLE_SIZE: f32 = 16.0;
const ROW_SPACING: f32 = 10.0;
const FORM_LABEL_WIDTH: f32 = 180.0;
const FORM_FONT_SIZE: f32 = 13.0;
const INPUT_WIDTH: f32 = 200.0;

/// Props for the settings form view.
pub(crate) struct SettingsFormProps<'a> {
    pub(crate) vm: SettingsViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the general and map settings sections.
pub(crate) fn view(
    props: SettingsFormProps<'_>,
) -> Element<'_, SettingsEvent, Theme, iced::Renderer> {
    let palette = *props.theme.palette();
    let data = props.vm.data;
    let language = data.language();

    let theme_picker = pick_list(
        ThemeChoice::ALL,
        Some(data.theme()),
        SettingsEvent::ThemeSelected,
    )
    .text_size(FORM_FONT_SIZE)
    .width(Length::Fixed(INPUT_WIDTH));

    let language_picker = pick_list(
        Language::ALL,
        Some(language),
        SettingsEvent::LanguageSelected,
    )
    .text_shaping(text::Shaping::Advanced)
    .text_size(FORM_FONT_SIZE)
    .width(Length::Fixed(INPUT_WIDTH));

    let zoom_slider = row![
        slider(
            MIN_ZOOM..=MAX_ZOOM,
            data.default_zoom(),
            SettingsEvent::ZoomChanged
        )
        .width(Length::Fixed(INPUT_WIDTH)),
        label(data.default_zoom().to_string()).size(FORM_FONT_SIZE),
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center);

    let general = section(
        i18n::text(language, Label::GeneralSettings),
        vec![
            form_row(i18n::text(language, Label::Theme), theme_picker.into()),
            form_row(
                i18n::text(language, Label::Language),
                language_picker.into(),
            ),
        ],
        palette,
    );

    // No tile cache exists yet, so the action stays disabled.
    let clear_cache_button = button(
        label(i18n::text(language, Label::ClearCache)).size(FORM_FONT_SIZE),
    )
    .style(style::secondary_button_style(palette));

    let map = section(
        i18n::text(language, Label::MapSettings),
        vec![
            form_row(
                i18n::text(language, Label::DefaultZoom),
                zoom_slider.into(),
            ),
            form_row(
                i18n::text(language, Label::CacheSize),
                clear_cache_button.into(),
            ),
        ],
        palette,
    );

    let reset_button = button(label(i18n::text(language, Label::Reset)))
        .on_press_maybe(props.vm.is_dirty.then_some(SettingsEvent::Reset))
        .style(style::secondary_button_style(palette));

    let content = column![
        label(i18n::text(language, Label::Settings)).size(PAGE_TITLE_SIZE),
        general,
        map,
        reset_button,
    ]
    .spacing(SECTION_SPACING)
    .padding(PAGE_PADDING)
    .width(Length::Fill);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section<'a>(
    title: &'a str,
    rows: Vec<Element<'a, SettingsEvent, Theme, iced::Renderer>>,
    palette: UiPalette,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    let body = Column::with_children(rows).spacing(ROW_SPACING);

    container(
        column![label(title).size(SECTION_TITLE_SIZE), body]
            .spacing(ROW_SPACING),
    )
    .width(Length::Fill)
    .padding(SECTION_PADDING)
    .style(style::card_style(palette))
    .into()
}

fn form_row<'a>(
    title: &'a str,
    input: Element<'a, SettingsEvent, Theme, iced::Renderer>,
) -> Element<'a, SettingsEvent, Theme, iced::Renderer> {
    row![
        container(label(title).size(FORM_FONT_SIZE))
            .width(Length::Fixed(FORM_LABEL_WIDTH)),
        input,
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center)
    .into()
}
