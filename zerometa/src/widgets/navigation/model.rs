use crate::widgets::catalog::Layer;

/// Viewports at or below this width use the mobile layout.
pub(crate) const MOBILE_BREAKPOINT: f32 = 768.0;

/// Page currently mounted in the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    Settings,
    Support,
    LayersGrid,
}

/// Pages reachable through `NavigateTo`. The layers grid has its own
/// command because it is rebuilt from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainPage {
    Home,
    Settings,
    Support,
}

impl From<MainPage> for Page {
    fn from(page: MainPage) -> Self {
        match page {
            MainPage::Home => Page::Home,
            MainPage::Settings => Page::Settings,
            MainPage::Support => Page::Support,
        }
    }
}

/// Responsive layout mode derived from the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    pub(crate) fn from_width(width: f32) -> Self {
        if width <= MOBILE_BREAKPOINT {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }

    pub(crate) fn is_mobile(self) -> bool {
        self == ViewportMode::Mobile
    }
}

/// Visibility of the secondary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelState {
    Closed,
    Open,
}

/// Entries of the primary sidebar rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEntry {
    Home,
    Layers,
    Pinned(String),
    Settings,
    Support,
}

impl SidebarEntry {
    /// The rail entry that represents `page`.
    pub(crate) fn for_page(page: Page) -> Self {
        match page {
            Page::Home => SidebarEntry::Home,
            Page::Settings => SidebarEntry::Settings,
            Page::Support => SidebarEntry::Support,
            Page::LayersGrid => SidebarEntry::Layers,
        }
    }
}

/// Outcome of a pin toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PinToggle {
    Pinned,
    Unpinned,
}

/// Layers pinned to the sidebar rail, in pin order.
///
/// Entries are owned snapshots: later changes to the catalog entry a layer
/// was pinned from never reach the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PinnedLayerSet {
    layers: Vec<Layer>,
}

impl PinnedLayerSet {
    pub(crate) fn contains(&self, id: &str) -> bool {
        self.layers.iter().any(|layer| layer.id == id)
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub(crate) fn ids(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.id.as_str()).collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Store a snapshot of `layer` unless its id is already pinned.
    pub(crate) fn insert(&mut self, layer: &Layer) -> bool {
        if self.contains(&layer.id) {
            return false;
        }
        self.layers.push(layer.clone());
        true
    }

    /// Unpin `layer` when pinned, otherwise pin a snapshot of it.
    pub(crate) fn toggle(&mut self, layer: &Layer) -> PinToggle {
        match self.layers.iter().position(|pinned| pinned.id == layer.id) {
            Some(index) => {
                self.layers.remove(index);
                PinToggle::Unpinned
            },
            None => {
                self.layers.push(layer.clone());
                PinToggle::Pinned
            },
        }
    }
}

/// Build the rail entries: fixed entries with pinned layers placed before
/// Settings, in pin order.
pub(crate) fn sidebar_entries(pinned: &PinnedLayerSet) -> Vec<SidebarEntry> {
    let mut entries = vec![
        SidebarEntry::Home,
        SidebarEntry::Layers,
        SidebarEntry::Settings,
        SidebarEntry::Support,
    ];
    for layer in pinned.iter() {
        place_before(
            &mut entries,
            &SidebarEntry::Settings,
            SidebarEntry::Pinned(layer.id.clone()),
        );
    }
    entries
}

/// Insert `item` before `anchor`, or append it when `anchor` is absent.
pub(crate) fn place_before<T: PartialEq>(items: &mut Vec<T>, anchor: &T, item: T) {
    match items.iter().position(|existing| existing == anchor) {
        Some(index) => items.insert(index, item),
        None => items.push(item),
    }
}

/// Read-only navigation snapshot for the presentation layer.
#[derive(Debug, Clone)]
pub(crate) struct NavigationViewModel<'a> {
    pub(crate) current_page: Page,
    pub(crate) entries: Vec<SidebarEntry>,
    pub(crate) active_entry: SidebarEntry,
    pub(crate) pinned: &'a PinnedLayerSet,
    pub(crate) grid: &'a [Layer],
    pub(crate) panel: PanelState,
    pub(crate) selected_layer: Option<&'a Layer>,
    pub(crate) viewport: ViewportMode,
    pub(crate) overlay_active: bool,
}
