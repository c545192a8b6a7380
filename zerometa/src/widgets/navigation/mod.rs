mod command;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::NavigationCommand;
pub(crate) use event::NavigationEvent;
use model::{
    NavigationViewModel, PanelState, ViewportMode, sidebar_entries,
};
pub(crate) use reducer::NavigationCtx;
use state::NavigationState;

use crate::widgets::catalog::{Layer, LayerCatalog};

/// Navigation widget: owns the current page, the secondary panel, the
/// pinned layers and the viewport mode.
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    /// Create the widget for a window of `window_width` pixels, pinning the
    /// catalog layers flagged to start pinned.
    pub(crate) fn new(catalog: &LayerCatalog, window_width: f32) -> Self {
        let mut state =
            NavigationState::new(ViewportMode::from_width(window_width));
        state.seed_pinned(catalog.initially_pinned());
        Self { state }
    }

    /// Apply a command to the navigation state.
    pub(crate) fn reduce(
        &mut self,
        command: NavigationCommand,
        ctx: &NavigationCtx<'_>,
    ) {
        reducer::reduce(&mut self.state, command, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> NavigationViewModel<'_> {
        NavigationViewModel {
            current_page: self.state.current_page(),
            entries: sidebar_entries(self.state.pinned()),
            active_entry: self.state.active_entry(),
            pinned: self.state.pinned(),
            grid: self.state.grid(),
            panel: self.state.panel(),
            selected_layer: self.state.selected_layer(),
            viewport: self.state.viewport(),
            overlay_active: self.state.is_overlay_active(),
        }
    }

    pub(crate) fn viewport(&self) -> ViewportMode {
        self.state.viewport()
    }

    pub(crate) fn is_panel_open(&self) -> bool {
        self.state.panel() == PanelState::Open
    }

    /// Layer shown by the grid cell with `id`.
    pub(crate) fn grid_layer(&self, id: &str) -> Option<&Layer> {
        self.state.grid().iter().find(|layer| layer.id == id)
    }

    /// Snapshot stored for the pinned layer with `id`.
    pub(crate) fn pinned_layer(&self, id: &str) -> Option<&Layer> {
        self.state.pinned().get(id)
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &NavigationState {
        &self.state
    }
}
