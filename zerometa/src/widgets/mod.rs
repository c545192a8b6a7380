pub(crate) mod catalog;
pub(crate) mod navigation;
pub(crate) mod settings;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: navigation::NavigationWidget,
    pub(crate) settings: settings::SettingsWidget,
}
