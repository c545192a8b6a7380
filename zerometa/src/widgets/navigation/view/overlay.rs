use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length, Theme};

use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::NavigationEvent;

/// Props for the mobile scrim behind the secondary panel.
pub(crate) struct OverlayProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a full-size scrim; pressing it closes the panel.
pub(crate) fn view(
    props: OverlayProps<'_>,
) -> Element<'_, NavigationEvent, Theme, iced::Renderer> {
    let scrim = props.theme.palette().scrim;

    let surface = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(scrim.into()),
            ..Default::default()
        });

    mouse_area(surface)
        .on_press(NavigationEvent::OverlayPressed)
        .into()
}
