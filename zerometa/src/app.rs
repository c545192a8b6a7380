#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::shared::ui::theme::AppTheme;
use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::catalog::LayerCatalog;
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};
use crate::widgets::settings::{SettingsEffect, SettingsEvent, SettingsWidget};

pub(crate) const INITIAL_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const INITIAL_WINDOW_HEIGHT: f32 = 720.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navigation widget
    Navigation(NavigationEvent),
    // Settings widget
    Settings(SettingsEvent),
    SettingsEffect(SettingsEffect),
    /// Press on the content or rail background, outside the secondary panel.
    OutsidePressed,
    Window(window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) state: State,
    pub(crate) catalog: LayerCatalog,
    pub(crate) theme: AppTheme,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let catalog = LayerCatalog::load();
        let window_size = Size::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT);
        let app = Self::with_catalog(catalog, window_size);

        log::info!("zerometa started with {} layers", app.catalog.len());
        let pinned = app.widgets.navigation.vm().pinned;
        if !pinned.is_empty() {
            log::debug!("pinned at startup: {:?}", pinned.ids());
        }

        (app, Task::none())
    }

    /// Build the application around an already loaded catalog.
    pub(crate) fn with_catalog(catalog: LayerCatalog, window_size: Size) -> Self {
        let settings = SettingsWidget::new();
        let theme = AppTheme::from_choice(settings.theme());
        let navigation = NavigationWidget::new(&catalog, window_size.width);

        Self {
            state: State::new(window_size),
            catalog,
            theme,
            widgets: Widgets {
                navigation,
                settings,
            },
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("ZeroMeta")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
