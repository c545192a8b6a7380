use super::model::MainPage;
use crate::widgets::catalog::Layer;

/// Transitions accepted by the navigation reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavigationCommand {
    NavigateTo(MainPage),
    ShowLayersGrid,
    ShowLayerDetails(Layer),
    TogglePinLayer(Layer),
    CloseAllSidebars,
    HandleResize { width: f32 },
}
