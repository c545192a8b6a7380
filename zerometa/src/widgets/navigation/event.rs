/// UI events emitted by the sidebar rail, the secondary panel, the overlay
/// and the layers grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationEvent {
    HomePressed,
    LayersPressed,
    SettingsPressed,
    SupportPressed,
    ClosePanelPressed,
    OverlayPressed,
    /// A layers grid cell was pressed outside its pin control.
    LayerPressed { layer_id: String },
    /// The pin control of a layers grid cell was pressed.
    PinPressed { layer_id: String },
    /// A pinned rail entry was pressed.
    PinnedPressed { layer_id: String },
}
