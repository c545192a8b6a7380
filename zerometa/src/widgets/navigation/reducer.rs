use super::command::NavigationCommand;
use super::model::PinToggle;
use super::state::NavigationState;
use crate::widgets::catalog::LayerCatalog;

/// Read-only context for navigation reduction.
pub(crate) struct NavigationCtx<'a> {
    pub(crate) catalog: &'a LayerCatalog,
}

/// Apply a navigation command to the state.
pub(crate) fn reduce(
    state: &mut NavigationState,
    command: NavigationCommand,
    ctx: &NavigationCtx<'_>,
) {
    match command {
        NavigationCommand::NavigateTo(page) => {
            log::debug!("navigate to {page:?}");
            state.navigate_to(page);
        },
        NavigationCommand::ShowLayersGrid => {
            log::debug!("show layers grid ({} layers)", ctx.catalog.len());
            state.show_layers_grid(ctx.catalog.layers());
        },
        NavigationCommand::ShowLayerDetails(layer) => {
            log::debug!("show layer details: {}", layer.id);
            state.show_layer_details(layer);
        },
        NavigationCommand::TogglePinLayer(layer) => {
            match state.toggle_pin_layer(&layer) {
                PinToggle::Pinned => log::debug!("pinned layer {}", layer.id),
                PinToggle::Unpinned => {
                    log::debug!("unpinned layer {}", layer.id)
                },
            }
        },
        NavigationCommand::CloseAllSidebars => state.close_all_sidebars(),
        NavigationCommand::HandleResize { width } => {
            if state.handle_resize(width) {
                log::debug!(
                    "viewport switched to {:?} at width {width}",
                    state.viewport()
                );
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationCtx;
    use crate::widgets::catalog::{Layer, LayerCatalog};
    use crate::widgets::navigation::model::{
        MainPage, Page, PanelState, SidebarEntry, ViewportMode,
    };
    use crate::widgets::navigation::{NavigationCommand, NavigationWidget};

    fn two_layer_catalog() -> LayerCatalog {
        LayerCatalog::new(vec![
            Layer::new("satellite", "Satellite", "satellite"),
            Layer::new("terrain", "Terrain", "mountain"),
        ])
    }

    fn reduce_all(
        widget: &mut NavigationWidget,
        catalog: &LayerCatalog,
        commands: impl IntoIterator<Item = NavigationCommand>,
    ) {
        let ctx = NavigationCtx { catalog };
        for command in commands {
            widget.reduce(command, &ctx);
        }
    }

    #[test]
    fn given_each_catalog_layer_when_pin_toggled_twice_then_membership_is_restored()
     {
        let catalog = LayerCatalog::builtin();
        let mut widget = NavigationWidget::new(&catalog, 1024.0);

        for layer in catalog.layers() {
            let before = widget.state().pinned().clone();
            reduce_all(
                &mut widget,
                &catalog,
                [
                    NavigationCommand::TogglePinLayer(layer.clone()),
                    NavigationCommand::TogglePinLayer(layer.clone()),
                ],
            );
            assert_eq!(widget.state().pinned(), &before);
        }
    }

    #[test]
    fn given_pinned_layer_when_catalog_entry_changes_then_snapshot_is_unchanged() {
        let mut catalog = two_layer_catalog();
        let mut widget = NavigationWidget::new(&catalog, 1024.0);
        let original = catalog.layers()[0].clone();

        reduce_all(
            &mut widget,
            &catalog,
            [NavigationCommand::TogglePinLayer(original.clone())],
        );
        if let Some(layer) = catalog.layer_mut("satellite") {
            layer.name = String::from("Renamed");
            layer.icon = String::from("globe");
        }

        assert!(widget.state().pinned().contains("satellite"));
        assert_eq!(widget.pinned_layer("satellite"), Some(&original));
        assert_ne!(catalog.layers()[0], original);
    }

    #[test]
    fn given_any_main_page_when_navigated_then_exactly_its_entry_is_active() {
        let catalog = two_layer_catalog();
        let mut widget = NavigationWidget::new(&catalog, 1024.0);

        for (page, entry) in [
            (MainPage::Home, SidebarEntry::Home),
            (MainPage::Settings, SidebarEntry::Settings),
            (MainPage::Support, SidebarEntry::Support),
        ] {
            reduce_all(
                &mut widget,
                &catalog,
                [NavigationCommand::NavigateTo(page)],
            );
            let vm = widget.vm();
            let active: Vec<&SidebarEntry> = vm
                .entries
                .iter()
                .filter(|candidate| **candidate == vm.active_entry)
                .collect();
            assert_eq!(active, vec![&entry]);
            assert_eq!(vm.current_page, Page::from(page));
        }
    }

    #[test]
    fn given_closed_panel_when_close_all_sidebars_then_state_is_identical() {
        let catalog = two_layer_catalog();
        let mut widget = NavigationWidget::new(&catalog, 400.0);
        let before = widget.state().clone();

        reduce_all(&mut widget, &catalog, [NavigationCommand::CloseAllSidebars]);

        assert_eq!(widget.state(), &before);
    }

    #[test]
    fn given_same_layer_when_details_shown_twice_then_state_is_unchanged() {
        let catalog = two_layer_catalog();
        let mut widget = NavigationWidget::new(&catalog, 400.0);
        let layer = catalog.layers()[1].clone();

        reduce_all(
            &mut widget,
            &catalog,
            [NavigationCommand::ShowLayerDetails(layer.clone())],
        );
        let once = widget.state().clone();
        reduce_all(
            &mut widget,
            &catalog,
            [NavigationCommand::ShowLayerDetails(layer)],
        );

        assert_eq!(widget.state(), &once);
    }

    #[test]
    fn given_desktop_resized_to_mobile_when_details_shown_then_overlay_activates()
     {
        let catalog = two_layer_catalog();
        let mut widget = NavigationWidget::new(&catalog, 800.0);

        reduce_all(
            &mut widget,
            &catalog,
            [
                NavigationCommand::HandleResize { width: 400.0 },
                NavigationCommand::ShowLayerDetails(
                    catalog.layers()[0].clone(),
                ),
            ],
        );

        let vm = widget.vm();
        assert_eq!(vm.viewport, ViewportMode::Mobile);
        assert_eq!(vm.panel, PanelState::Open);
        assert!(vm.overlay_active);
    }

    #[test]
    fn given_mobile_overlay_when_resized_to_desktop_then_overlay_deactivates() {
        let catalog = two_layer_catalog();

        let mut open = NavigationWidget::new(&catalog, 400.0);
        reduce_all(
            &mut open,
            &catalog,
            [
                NavigationCommand::ShowLayerDetails(
                    catalog.layers()[0].clone(),
                ),
                NavigationCommand::HandleResize { width: 800.0 },
            ],
        );
        assert_eq!(open.vm().panel, PanelState::Open);
        assert!(!open.vm().overlay_active);

        let mut closed = NavigationWidget::new(&catalog, 400.0);
        reduce_all(
            &mut closed,
            &catalog,
            [
                NavigationCommand::ShowLayerDetails(
                    catalog.layers()[0].clone(),
                ),
                NavigationCommand::CloseAllSidebars,
                NavigationCommand::HandleResize { width: 800.0 },
            ],
        );
        assert_eq!(closed.vm().panel, PanelState::Closed);
        assert!(!closed.vm().overlay_active);
    }

    #[test]
    fn given_two_layer_catalog_when_grid_shown_and_pin_toggled_then_pins_follow_toggles()
     {
        let catalog = two_layer_catalog();
        let mut widget = NavigationWidget::new(&catalog, 1024.0);

        reduce_all(&mut widget, &catalog, [NavigationCommand::ShowLayersGrid]);
        let ids: Vec<&str> =
            widget.vm().grid.iter().map(|layer| layer.id.as_str()).collect();
        assert_eq!(ids, vec!["satellite", "terrain"]);
        assert_eq!(widget.vm().active_entry, SidebarEntry::Layers);

        let satellite = widget
            .grid_layer("satellite")
            .cloned()
            .expect("grid should contain satellite");
        reduce_all(
            &mut widget,
            &catalog,
            [NavigationCommand::TogglePinLayer(satellite.clone())],
        );
        assert_eq!(widget.state().pinned().ids(), vec!["satellite"]);

        reduce_all(
            &mut widget,
            &catalog,
            [NavigationCommand::TogglePinLayer(satellite)],
        );
        assert!(widget.state().pinned().ids().is_empty());
        assert_eq!(widget.vm().panel, PanelState::Closed);
    }

    #[test]
    fn given_home_when_navigating_to_settings_then_only_settings_is_active() {
        let catalog = two_layer_catalog();
        let mut widget = NavigationWidget::new(&catalog, 1024.0);
        assert_eq!(widget.vm().current_page, Page::Home);

        reduce_all(
            &mut widget,
            &catalog,
            [NavigationCommand::NavigateTo(MainPage::Settings)],
        );

        let vm = widget.vm();
        assert_eq!(vm.current_page, Page::Settings);
        assert_eq!(vm.active_entry, SidebarEntry::Settings);
        assert_ne!(vm.active_entry, SidebarEntry::Home);
        assert_ne!(vm.active_entry, SidebarEntry::Support);
    }
}
