use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::catalog::Layer;
use crate::widgets::navigation::model::MainPage;
use crate::widgets::navigation::{
    NavigationCommand, NavigationCtx, NavigationEvent, NavigationWidget,
};

/// Route a navigation UI event to its controller command.
pub(crate) fn route_event(
    app: &mut App,
    event: NavigationEvent,
) -> Task<AppEvent> {
    match map_event_to_command(&app.widgets.navigation, event) {
        Some(command) => route_command(app, command),
        None => Task::none(),
    }
}

/// Route a navigation command directly (used by the panel guard and the
/// window router).
pub(crate) fn route_command(
    app: &mut App,
    command: NavigationCommand,
) -> Task<AppEvent> {
    let ctx = NavigationCtx {
        catalog: &app.catalog,
    };
    app.widgets.navigation.reduce(command, &ctx);
    Task::none()
}

/// Map a UI event to exactly one command. Events naming an unknown layer
/// are dropped.
fn map_event_to_command(
    widget: &NavigationWidget,
    event: NavigationEvent,
) -> Option<NavigationCommand> {
    use NavigationEvent as E;

    let command = match event {
        E::HomePressed => NavigationCommand::NavigateTo(MainPage::Home),
        E::LayersPressed => NavigationCommand::ShowLayersGrid,
        E::SettingsPressed => NavigationCommand::NavigateTo(MainPage::Settings),
        E::SupportPressed => NavigationCommand::NavigateTo(MainPage::Support),
        E::ClosePanelPressed | E::OverlayPressed => {
            NavigationCommand::CloseAllSidebars
        },
        E::LayerPressed { layer_id } => NavigationCommand::ShowLayerDetails(
            resolve(widget.grid_layer(&layer_id), &layer_id, "grid")?,
        ),
        E::PinPressed { layer_id } => NavigationCommand::TogglePinLayer(
            resolve(widget.grid_layer(&layer_id), &layer_id, "grid")?,
        ),
        E::PinnedPressed { layer_id } => NavigationCommand::ShowLayerDetails(
            resolve(widget.pinned_layer(&layer_id), &layer_id, "pinned set")?,
        ),
    };

    Some(command)
}

fn resolve(layer: Option<&Layer>, id: &str, source: &str) -> Option<Layer> {
    if layer.is_none() {
        log::debug!("dropping event for layer {id:?}: not in {source}");
    }
    layer.cloned()
}

#[cfg(test)]
mod tests {
    use super::map_event_to_command;
    use crate::widgets::catalog::{Layer, LayerCatalog};
    use crate::widgets::navigation::model::MainPage;
    use crate::widgets::navigation::{
        NavigationCommand, NavigationCtx, NavigationEvent, NavigationWidget,
    };

    fn grid_widget(catalog: &LayerCatalog) -> NavigationWidget {
        let mut widget = NavigationWidget::new(catalog, 1024.0);
        widget
            .reduce(NavigationCommand::ShowLayersGrid, &NavigationCtx { catalog });
        widget
    }

    #[test]
    fn given_rail_presses_when_mapped_then_each_yields_its_command() {
        let catalog = LayerCatalog::builtin();
        let widget = grid_widget(&catalog);

        let cases = [
            (
                NavigationEvent::HomePressed,
                NavigationCommand::NavigateTo(MainPage::Home),
            ),
            (NavigationEvent::LayersPressed, NavigationCommand::ShowLayersGrid),
            (
                NavigationEvent::SettingsPressed,
                NavigationCommand::NavigateTo(MainPage::Settings),
            ),
            (
                NavigationEvent::SupportPressed,
                NavigationCommand::NavigateTo(MainPage::Support),
            ),
            (
                NavigationEvent::ClosePanelPressed,
                NavigationCommand::CloseAllSidebars,
            ),
            (
                NavigationEvent::OverlayPressed,
                NavigationCommand::CloseAllSidebars,
            ),
        ];

        for (event, expected) in cases {
            assert_eq!(map_event_to_command(&widget, event), Some(expected));
        }
    }

    #[test]
    fn given_grid_cell_press_when_mapped_then_carries_grid_layer() {
        let catalog = LayerCatalog::builtin();
        let widget = grid_widget(&catalog);

        let command = map_event_to_command(&widget, NavigationEvent::PinPressed {
            layer_id: String::from("traffic"),
        });

        assert_eq!(
            command,
            Some(NavigationCommand::TogglePinLayer(Layer::new(
                "traffic", "Traffic", "car"
            )))
        );
    }

    #[test]
    fn given_unknown_layer_id_when_mapped_then_event_is_dropped() {
        let catalog = LayerCatalog::builtin();
        let widget = grid_widget(&catalog);

        for event in [
            NavigationEvent::LayerPressed {
                layer_id: String::from("missing"),
            },
            NavigationEvent::PinnedPressed {
                layer_id: String::from("satellite"),
            },
        ] {
            assert_eq!(map_event_to_command(&widget, event), None);
        }
    }

    #[test]
    fn given_pinned_entry_press_when_mapped_then_shows_stored_snapshot() {
        let mut catalog = LayerCatalog::builtin();
        let mut widget = grid_widget(&catalog);
        let weather = catalog.layers()[3].clone();
        widget.reduce(
            NavigationCommand::TogglePinLayer(weather.clone()),
            &NavigationCtx { catalog: &catalog },
        );
        if let Some(layer) = catalog.layer_mut("weather") {
            layer.name = String::from("Forecast");
        }

        let command =
            map_event_to_command(&widget, NavigationEvent::PinnedPressed {
                layer_id: String::from("weather"),
            });

        assert_eq!(command, Some(NavigationCommand::ShowLayerDetails(weather)));
    }
}
