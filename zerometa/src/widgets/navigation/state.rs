use super::model::{
    MainPage, Page, PanelState, PinToggle, PinnedLayerSet, SidebarEntry,
    ViewportMode,
};
use crate::widgets::catalog::Layer;

/// Internal navigation state: what the content area and the secondary
/// panel currently show.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NavigationState {
    current_page: Page,
    grid: Vec<Layer>,
    panel: PanelState,
    selected_layer: Option<Layer>,
    pinned: PinnedLayerSet,
    viewport: ViewportMode,
    overlay_active: bool,
}

impl NavigationState {
    /// Start on the home page with the panel closed.
    pub(crate) fn new(viewport: ViewportMode) -> Self {
        Self {
            current_page: Page::Home,
            grid: Vec::new(),
            panel: PanelState::Closed,
            selected_layer: None,
            pinned: PinnedLayerSet::default(),
            viewport,
            overlay_active: false,
        }
    }

    pub(crate) fn current_page(&self) -> Page {
        self.current_page
    }

    pub(crate) fn grid(&self) -> &[Layer] {
        &self.grid
    }

    pub(crate) fn panel(&self) -> PanelState {
        self.panel
    }

    pub(crate) fn selected_layer(&self) -> Option<&Layer> {
        self.selected_layer.as_ref()
    }

    pub(crate) fn pinned(&self) -> &PinnedLayerSet {
        &self.pinned
    }

    pub(crate) fn viewport(&self) -> ViewportMode {
        self.viewport
    }

    pub(crate) fn is_overlay_active(&self) -> bool {
        self.overlay_active
    }

    /// The single active rail entry, derived from the current page.
    pub(crate) fn active_entry(&self) -> SidebarEntry {
        SidebarEntry::for_page(self.current_page)
    }

    /// Pin catalog layers flagged to start pinned.
    pub(crate) fn seed_pinned<'a>(
        &mut self,
        layers: impl IntoIterator<Item = &'a Layer>,
    ) {
        for layer in layers {
            self.pinned.insert(layer);
        }
    }

    pub(crate) fn navigate_to(&mut self, page: MainPage) {
        self.current_page = page.into();
        self.grid.clear();
    }

    pub(crate) fn show_layers_grid(&mut self, layers: &[Layer]) {
        self.current_page = Page::LayersGrid;
        self.grid = layers.to_vec();
    }

    pub(crate) fn show_layer_details(&mut self, layer: Layer) {
        self.selected_layer = Some(layer);
        self.panel = PanelState::Open;
        if self.viewport.is_mobile() {
            self.overlay_active = true;
        }
    }

    pub(crate) fn toggle_pin_layer(&mut self, layer: &Layer) -> PinToggle {
        self.pinned.toggle(layer)
    }

    pub(crate) fn close_all_sidebars(&mut self) {
        self.panel = PanelState::Closed;
        // The overlay is only ever active in mobile mode.
        self.overlay_active = false;
    }

    /// Recompute the viewport mode. Returns `true` when the mode changed.
    pub(crate) fn handle_resize(&mut self, width: f32) -> bool {
        let was = self.viewport;
        self.viewport = ViewportMode::from_width(width);

        if was == self.viewport {
            return false;
        }
        if !self.viewport.is_mobile() {
            self.overlay_active = false;
        }
        true
    }
}
