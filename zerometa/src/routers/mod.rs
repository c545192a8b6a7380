use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod navigation;
pub(crate) mod settings;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Navigation widget
        AppEvent::Navigation(event) => navigation::route_event(app, event),
        // Settings widget
        AppEvent::Settings(event) => settings::route_event(app, event),
        AppEvent::SettingsEffect(effect) => settings::route_effect(app, effect),
        // Handled by the panel guard before dispatch.
        AppEvent::OutsidePressed => Task::none(),
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
