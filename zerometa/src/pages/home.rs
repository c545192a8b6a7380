use iced::widget::{column, container};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::i18n::{self, Label};
use crate::shared::ui::style::label;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::settings::model::Language;

const TITLE_FONT_SIZE: f32 = 28.0;
const BODY_FONT_SIZE: f32 = 15.0;
const SPACING: f32 = 12.0;

/// Props for the home page.
pub(crate) struct HomeProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) language: Language,
}

/// Render the welcome message.
pub(crate) fn view<'a, Message: 'a>(
    props: HomeProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.palette();

    let content = column![
        label(i18n::text(props.language, Label::Welcome)).size(TITLE_FONT_SIZE),
        label(i18n::text(props.language, Label::WelcomeBody))
            .size(BODY_FONT_SIZE)
            .color(palette.dim_foreground),
    ]
    .spacing(SPACING)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
