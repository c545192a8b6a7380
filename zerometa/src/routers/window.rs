use iced::Task;

use super::navigation;
use crate::app::{App, AppEvent};
use crate::widgets::navigation::NavigationCommand;

/// Handle window resize events and propagate the viewport change.
pub(crate) fn handle_resize(app: &mut App, size: iced::Size) -> Task<AppEvent> {
    app.state.set_window_size(size);
    navigation::route_command(
        app,
        NavigationCommand::HandleResize { width: size.width },
    )
}
