use crate::app::AppEvent;
use crate::widgets::navigation::model::ViewportMode;

/// Determines how the event loop should treat an incoming event while the
/// secondary panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Close the panel before dispatching.
    Dismiss,
}

/// Classify an incoming event when the secondary panel is open.
pub(crate) fn panel_guard(event: &AppEvent, viewport: ViewportMode) -> PanelGuard {
    use PanelGuard::*;

    // On mobile the overlay takes presses outside the panel.
    let outside_press = if viewport.is_mobile() { Allow } else { Dismiss };

    match event {
        AppEvent::Navigation(event) => {
            use crate::widgets::navigation::NavigationEvent as E;
            match event {
                E::HomePressed | E::LayersPressed => Dismiss,
                E::SettingsPressed
                | E::SupportPressed
                | E::ClosePanelPressed
                | E::OverlayPressed
                | E::LayerPressed { .. }
                | E::PinPressed { .. }
                | E::PinnedPressed { .. } => Allow,
            }
        },
        AppEvent::OutsidePressed | AppEvent::Settings(_) => outside_press,
        AppEvent::SettingsEffect(_) | AppEvent::Window(_) => Allow,
    }
}
