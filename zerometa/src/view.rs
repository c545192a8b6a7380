use iced::widget::{Row, Space, Stack, container, mouse_area, opaque, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::pages::home::{self, HomeProps};
use crate::pages::support::{self, SupportProps};
use crate::shared::ui::theme::ThemeProps;
use crate::state::grid_columns;
use crate::widgets::navigation::model::{Page, PanelState};
use crate::widgets::navigation::view::layers_grid::{self, LayersGridProps};
use crate::widgets::navigation::view::overlay::{self, OverlayProps};
use crate::widgets::navigation::view::secondary_panel::{
    self, SecondaryPanelProps,
};
use crate::widgets::navigation::view::sidebar_rail::{
    self, SIDEBAR_RAIL_WIDTH, SidebarRailProps,
};
use crate::widgets::settings::view::settings_form::{self, SettingsFormProps};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);
    let palette = *theme_props.palette();
    let language = app.widgets.settings.language();
    let vm = app.widgets.navigation.vm();
    let is_mobile = vm.viewport.is_mobile();

    let page: Element<'_, AppEvent, Theme, iced::Renderer> =
        match vm.current_page {
            Page::Home => home::view(HomeProps {
                theme: theme_props,
                language,
            }),
            Page::Settings => settings_form::view(SettingsFormProps {
                vm: app.widgets.settings.vm(),
                theme: theme_props,
            })
            .map(AppEvent::Settings),
            Page::Support => support::view(SupportProps {
                theme: theme_props,
                language,
            }),
            Page::LayersGrid => layers_grid::view(LayersGridProps {
                grid: vm.grid,
                pinned: vm.pinned,
                theme: theme_props,
                language,
                columns: grid_columns(is_mobile, app.state.window_size().width),
            })
            .map(AppEvent::Navigation),
        };

    let content = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        });
    let content = mouse_area(content).on_press(AppEvent::OutsidePressed);

    let panel = (vm.panel == PanelState::Open).then(|| {
        secondary_panel::view(SecondaryPanelProps {
            selected_layer: vm.selected_layer,
            theme: theme_props,
            language,
        })
        .map(AppEvent::Navigation)
    });

    let rail = sidebar_rail::view(SidebarRailProps {
        entries: vm.entries,
        active_entry: vm.active_entry,
        pinned: vm.pinned,
        theme: theme_props,
        language,
    })
    .map(AppEvent::Navigation);

    if !is_mobile {
        // Rail buttons capture their presses, so only the logo and the empty
        // rail background reach this area.
        let rail = mouse_area(rail).on_press(AppEvent::OutsidePressed);
        let mut layout = Row::new().push(rail);
        if let Some(panel) = panel {
            layout = layout.push(panel);
        }
        return layout
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    // Mobile: the panel slides over the content, next to the rail.
    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        row![rail, content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    ];

    if vm.overlay_active {
        let scrim = overlay::view(OverlayProps { theme: theme_props })
            .map(AppEvent::Navigation);
        layers.push(beside_rail(scrim));
    }

    if let Some(panel) = panel {
        layers.push(beside_rail(opaque(panel)));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn beside_rail(
    element: Element<'_, AppEvent, Theme, iced::Renderer>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    row![Space::new().width(Length::Fixed(SIDEBAR_RAIL_WIDTH)), element]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use iced_test::simulator;

    use crate::app::{App, AppEvent};
    use crate::shared::ui::icons;
    use crate::widgets::catalog::LayerCatalog;
    use crate::widgets::navigation::NavigationEvent;

    fn app_on_layers_grid(width: f32) -> App {
        let mut app =
            App::with_catalog(LayerCatalog::builtin(), Size::new(width, 720.0));
        let _task =
            app.update(AppEvent::Navigation(NavigationEvent::LayersPressed));
        app
    }

    fn app_with_open_panel(width: f32) -> App {
        let mut app = app_on_layers_grid(width);
        let _task = app.update(AppEvent::Navigation(
            NavigationEvent::LayerPressed {
                layer_id: String::from("terrain"),
            },
        ));
        assert!(app.widgets.navigation.is_panel_open());
        app
    }

    fn click(app: &App, target: &str) -> Vec<AppEvent> {
        let mut ui = simulator(app.view());
        let _target = ui
            .click(target)
            .unwrap_or_else(|err| panic!("failed to click {target:?}: {err:?}"));
        ui.into_messages().collect()
    }

    #[test]
    fn given_layers_grid_when_pin_clicked_then_only_pin_event_is_emitted() {
        let app = app_on_layers_grid(1024.0);

        let events = click(&app, "Pin");

        assert_eq!(events.len(), 1, "unexpected events: {events:?}");
        assert!(matches!(
            &events[0],
            AppEvent::Navigation(NavigationEvent::PinPressed { layer_id })
                if layer_id == "satellite"
        ));
    }

    #[test]
    fn given_layers_grid_when_cell_name_clicked_then_layer_event_is_emitted() {
        let app = app_on_layers_grid(1024.0);

        let events = click(&app, "Satellite");

        assert_eq!(events.len(), 1, "unexpected events: {events:?}");
        assert!(matches!(
            &events[0],
            AppEvent::Navigation(NavigationEvent::LayerPressed { layer_id })
                if layer_id == "satellite"
        ));
    }

    #[test]
    fn given_open_panel_on_desktop_when_content_header_clicked_then_outside_press_closes_panel()
     {
        let mut app = app_with_open_panel(1024.0);

        let events = click(&app, "Available Layers");
        assert!(matches!(events.as_slice(), [AppEvent::OutsidePressed]));

        for event in events {
            let _task = app.update(event);
        }
        assert!(!app.widgets.navigation.is_panel_open());
    }

    #[test]
    fn given_open_panel_on_desktop_when_rail_logo_clicked_then_outside_press_closes_panel()
     {
        let mut app = app_with_open_panel(1024.0);

        let events = click(&app, icons::LOGO);
        assert!(matches!(events.as_slice(), [AppEvent::OutsidePressed]));

        for event in events {
            let _task = app.update(event);
        }
        assert!(!app.widgets.navigation.is_panel_open());
    }
}
