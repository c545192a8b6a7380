pub(crate) mod layers_grid;
pub(crate) mod overlay;
pub(crate) mod secondary_panel;
pub(crate) mod sidebar_rail;
