use super::super::state::App;
use crate::config::ViewMode;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_set_view_mode(&mut self, mode: ViewMode) {
        if self.list.view_mode != mode {
            info!(from = %self.list.view_mode, to = %mode, "Switched view mode");
        }
        self.list.set_view_mode(mode);
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = %self.config.theme, "Toggled theme");
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() {
            self.viewport.window_width = width.max(0.0);
            debug!(width, height, columns = self.grid_columns(), "Window resized");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::state::sample_books;
    use crate::config::{AppConfig, ThemeMode};

    fn loaded_app() -> App {
        let mut app = App::new(AppConfig::default());
        app.reduce(Message::CatalogLoaded(Ok(sample_books(12))));
        app
    }

    #[test]
    fn grid_twice_matches_grid_once() {
        let mut once = loaded_app();
        once.reduce(Message::SetViewMode(ViewMode::Grid));

        let mut twice = loaded_app();
        twice.reduce(Message::SetViewMode(ViewMode::Grid));
        twice.reduce(Message::SetViewMode(ViewMode::Grid));

        assert_eq!(once.list.cards, twice.list.cards);
        assert_eq!(once.list.view_mode, twice.list.view_mode);
    }

    #[test]
    fn view_switch_keeps_data_and_cursor() {
        let mut app = loaded_app();
        let effects = app.reduce(Message::SetViewMode(ViewMode::Grid));
        assert!(effects.is_empty());
        assert_eq!(app.list.displayed, 10);
        assert_eq!(app.list.books.len(), 12);
        assert!(
            app.list
                .cards
                .iter()
                .all(|card| card.view_mode == ViewMode::Grid)
        );

        app.reduce(Message::SetViewMode(ViewMode::List));
        assert!(
            app.list
                .cards
                .iter()
                .all(|card| card.view_mode == ViewMode::List)
        );
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut app = loaded_app();
        assert_eq!(app.config.theme, ThemeMode::Day);
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, ThemeMode::Night);
    }

    #[test]
    fn resize_ignores_non_finite_sizes() {
        let mut app = loaded_app();
        app.reduce(Message::WindowResized {
            width: f32::NAN,
            height: 500.0,
        });
        assert_eq!(app.viewport.window_width, 1024.0);
        app.reduce(Message::WindowResized {
            width: 1600.0,
            height: 900.0,
        });
        assert_eq!(app.viewport.window_width, 1600.0);
    }
}
