use iced::widget::{Row, button, column, container, row, scrollable};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::i18n::{self, Label};
use crate::shared::ui::icons;
use crate::shared::ui::style::{self, label};
use crate::shared::ui::theme::{ThemeProps, UiPalette};
use crate::widgets::settings::model::Language;

const PAGE_PADDING: f32 = 24.0;
const PAGE_TITLE_SIZE: f32 = 22.0;
const PAGE_SPACING: f32 = 16.0;
const CARD_PADDING: f32 = 16.0;
const CARD_SPACING: f32 = 10.0;
const CARD_ICON_SIZE: f32 = 28.0;
const CARD_TITLE_SIZE: f32 = 16.0;
const CARD_BODY_SIZE: f32 = 13.0;
const SHARE_TARGETS: [&str; 3] = ["Twitter", "Facebook", "WhatsApp"];

/// Props for the support page.
pub(crate) struct SupportProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) language: Language,
}

/// Render the ways to support the project. Actions have no handlers yet and
/// render disabled.
pub(crate) fn view<'a, Message: Clone + 'a>(
    props: SupportProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.palette();
    let language = props.language;

    let donate = option_card(
        icons::SUPPORT,
        i18n::text(language, Label::FinancialSupport),
        i18n::text(language, Label::FinancialSupportBody),
        button(label(i18n::text(language, Label::DonateNow)))
            .style(style::primary_button_style(palette))
            .into(),
        palette,
    );

    let contribute = option_card(
        "</>",
        i18n::text(language, Label::TechnicalSupport),
        i18n::text(language, Label::TechnicalSupportBody),
        button(label(i18n::text(language, Label::Contribute)))
            .style(style::secondary_button_style(palette))
            .into(),
        palette,
    );

    let share_buttons = SHARE_TARGETS.iter().fold(
        Row::new().spacing(CARD_SPACING),
        |buttons, target| {
            buttons.push(
                button(label(*target))
                    .style(style::secondary_button_style(palette)),
            )
        },
    );

    let share = option_card(
        "⇪",
        i18n::text(language, Label::Share),
        i18n::text(language, Label::ShareBody),
        share_buttons.into(),
        palette,
    );

    let content = column![
        label(i18n::text(language, Label::SupportTitle)).size(PAGE_TITLE_SIZE),
        row![donate, contribute, share].spacing(PAGE_SPACING),
    ]
    .spacing(PAGE_SPACING)
    .padding(PAGE_PADDING)
    .width(Length::Fill);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn option_card<'a, Message: Clone + 'a>(
    glyph: &'static str,
    title: &'static str,
    body: &'static str,
    action: Element<'a, Message, Theme, iced::Renderer>,
    palette: UiPalette,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let content = column![
        label(glyph).size(CARD_ICON_SIZE).color(palette.accent),
        label(title).size(CARD_TITLE_SIZE),
        label(body).size(CARD_BODY_SIZE).color(palette.dim_foreground),
        action,
    ]
    .spacing(CARD_SPACING)
    .align_x(alignment::Horizontal::Center)
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .padding(CARD_PADDING)
        .style(style::card_style(palette))
        .into()
}
