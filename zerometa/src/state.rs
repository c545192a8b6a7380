use iced::Size;

/// Grid columns used in the mobile layout.
const MOBILE_GRID_COLUMNS: usize = 2;
/// Grid columns used in the desktop layout.
const DESKTOP_GRID_COLUMNS: usize = 3;
const WIDE_GRID_COLUMNS: usize = 4;
const WIDE_WINDOW_WIDTH: f32 = 1440.0;

/// Window geometry state.
#[derive(Debug, Default)]
pub(crate) struct State {
    window_size: Size,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self { window_size }
    }

    pub(crate) fn window_size(&self) -> Size {
        self.window_size
    }

    /// Record the window size after a resize.
    pub(crate) fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }
}

/// Number of layer grid columns for the given window width.
pub(crate) fn grid_columns(is_mobile: bool, window_width: f32) -> usize {
    if is_mobile {
        MOBILE_GRID_COLUMNS
    } else if window_width >= WIDE_WINDOW_WIDTH {
        WIDE_GRID_COLUMNS
    } else {
        DESKTOP_GRID_COLUMNS
    }
}

#[cfg(test)]
mod tests {
    use super::grid_columns;

    #[test]
    fn given_layout_mode_when_computing_columns_then_matches_width_class() {
        assert_eq!(grid_columns(true, 600.0), 2);
        assert_eq!(grid_columns(false, 1024.0), 3);
        assert_eq!(grid_columns(false, 1920.0), 4);
    }
}
