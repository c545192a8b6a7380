use iced::Task;

use crate::app::{App, AppEvent};
use crate::shared::ui::theme::AppTheme;
use crate::widgets::settings::model::ThemeChoice;
use crate::widgets::settings::{SettingsEffect, SettingsEvent};

/// Route a settings UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: SettingsEvent,
) -> Task<AppEvent> {
    app.widgets
        .settings
        .reduce(event)
        .map(AppEvent::SettingsEffect)
}

/// Route a settings effect event to app-level state.
pub(crate) fn route_effect(
    app: &mut App,
    effect: SettingsEffect,
) -> Task<AppEvent> {
    match effect {
        SettingsEffect::ApplyTheme(choice) => apply_theme(app, choice),
    }
    Task::none()
}

fn apply_theme(app: &mut App, choice: ThemeChoice) {
    if app.theme.choice() == choice {
        return;
    }
    log::info!("applying {choice} theme");
    app.theme = AppTheme::from_choice(choice);
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::route_effect;
    use crate::app::App;
    use crate::widgets::catalog::LayerCatalog;
    use crate::widgets::settings::SettingsEffect;
    use crate::widgets::settings::model::ThemeChoice;

    #[test]
    fn given_apply_theme_effect_when_routed_then_app_theme_switches() {
        let mut app =
            App::with_catalog(LayerCatalog::builtin(), Size::new(1024.0, 720.0));

        let _task =
            route_effect(&mut app, SettingsEffect::ApplyTheme(ThemeChoice::Light));

        assert_eq!(app.theme.choice(), ThemeChoice::Light);
    }
}
