mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::{AppConfig, ThemeMode};
use iced::{Size, Theme, window};

/// Launch the shelf window with the loaded configuration.
pub fn run_app(config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Book Shelf", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| iced_theme(app.config.theme))
        .run_with(move || App::bootstrap(config))
}

fn iced_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Day => Theme::Light,
        ThemeMode::Night => Theme::Dark,
    }
}
