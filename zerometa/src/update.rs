use iced::Task;

use super::{App, AppEvent};
use crate::guards::{PanelGuard, panel_guard};
use crate::routers;
use crate::widgets::navigation::NavigationCommand;

/// Run the panel guard, then route the event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    let mut tasks = Vec::with_capacity(2);

    if app.widgets.navigation.is_panel_open() {
        match panel_guard(&event, app.widgets.navigation.viewport()) {
            PanelGuard::Allow => {},
            PanelGuard::Dismiss => {
                tasks.push(routers::navigation::route_command(
                    app,
                    NavigationCommand::CloseAllSidebars,
                ));
            },
        }
    }

    tasks.push(routers::route(app, event));
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use iced::{Size, window};

    use super::update;
    use crate::app::{App, AppEvent};
    use crate::widgets::catalog::LayerCatalog;
    use crate::widgets::navigation::NavigationEvent;
    use crate::widgets::navigation::model::{Page, ViewportMode};

    fn app_with_open_panel(width: f32) -> App {
        let mut app =
            App::with_catalog(LayerCatalog::builtin(), Size::new(width, 720.0));
        let _task = update(
            &mut app,
            AppEvent::Navigation(NavigationEvent::LayersPressed),
        );
        let _task = update(
            &mut app,
            AppEvent::Navigation(NavigationEvent::LayerPressed {
                layer_id: String::from("terrain"),
            }),
        );
        assert!(app.widgets.navigation.is_panel_open());
        app
    }

    #[test]
    fn given_open_panel_on_desktop_when_outside_pressed_then_panel_closes() {
        let mut app = app_with_open_panel(1024.0);

        let _task = update(&mut app, AppEvent::OutsidePressed);

        assert!(!app.widgets.navigation.is_panel_open());
    }

    #[test]
    fn given_open_panel_on_mobile_when_outside_pressed_then_panel_stays_open() {
        let mut app = app_with_open_panel(400.0);

        let _task = update(&mut app, AppEvent::OutsidePressed);

        assert!(app.widgets.navigation.is_panel_open());
        assert!(app.widgets.navigation.vm().overlay_active);
    }

    #[test]
    fn given_open_panel_on_mobile_when_home_pressed_then_panel_closes_and_page_is_home()
     {
        let mut app = app_with_open_panel(400.0);

        let _task =
            update(&mut app, AppEvent::Navigation(NavigationEvent::HomePressed));

        let vm = app.widgets.navigation.vm();
        assert!(!app.widgets.navigation.is_panel_open());
        assert!(!vm.overlay_active);
        assert_eq!(vm.current_page, Page::Home);
    }

    #[test]
    fn given_open_panel_when_pin_pressed_then_panel_stays_open() {
        let mut app = app_with_open_panel(1024.0);

        let _task = update(
            &mut app,
            AppEvent::Navigation(NavigationEvent::PinPressed {
                layer_id: String::from("terrain"),
            }),
        );

        assert!(app.widgets.navigation.is_panel_open());
        assert_eq!(app.widgets.navigation.vm().pinned.ids(), vec!["terrain"]);
    }

    #[test]
    fn given_resize_event_when_updated_then_viewport_and_window_size_follow() {
        let mut app =
            App::with_catalog(LayerCatalog::builtin(), Size::new(1024.0, 720.0));

        let _task = update(
            &mut app,
            AppEvent::Window(window::Event::Resized(Size::new(500.0, 700.0))),
        );

        assert_eq!(app.widgets.navigation.viewport(), ViewportMode::Mobile);
        assert_eq!(app.state.window_size(), Size::new(500.0, 700.0));
    }
}
