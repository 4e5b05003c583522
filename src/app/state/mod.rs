mod constants;
mod detail;
mod list;
mod touch;
mod ui;

use crate::cache::default_cache_root;
use crate::config::AppConfig;
use crate::covers::resolve_cover_source;
use iced::Task;
use std::path::PathBuf;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use detail::DetailState;
#[cfg(test)]
pub(in crate::app) use list::sample_books;
pub(in crate::app) use list::{ListState, RenderedCard};
pub(in crate::app) use touch::TapState;
pub(in crate::app) use ui::{CoverSlot, CoverState, ViewportState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) touch_input: bool,
    pub(super) list: ListState,
    pub(super) detail: DetailState,
    pub(super) tap: TapState,
    pub(super) covers: CoverState,
    pub(super) viewport: ViewportState,
    pub(super) cache_root: PathBuf,
}

impl App {
    pub(super) fn new(mut config: AppConfig) -> App {
        clamp_config(&mut config);
        App {
            touch_input: config.touch_input,
            list: ListState::new(
                config.default_view,
                config.batch_size,
                config.description_preview_chars,
            ),
            detail: DetailState::default(),
            tap: TapState::default(),
            covers: CoverState::default(),
            viewport: ViewportState::new(config.window_width),
            cache_root: default_cache_root(),
            config,
        }
    }

    pub(super) fn bootstrap(config: AppConfig) -> (App, Task<Message>) {
        let mut app = App::new(config);
        tracing::info!(
            source = %app.config.catalog_source,
            batch_size = app.list.batch_size,
            view = %app.list.view_mode,
            touch = app.touch_input,
            "Initialized app state"
        );
        let mut effects = Vec::new();
        app.begin_catalog_load(&mut effects);
        let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }

    pub(super) fn cover_source_for(&self, book_idx: usize) -> Option<String> {
        self.list
            .book(book_idx)
            .map(|book| resolve_cover_source(&self.config.catalog_source, &book.cover_url))
    }

    /// Number of grid columns that fit the current layout width.
    pub(super) fn grid_columns(&self) -> usize {
        let slot = self.config.card_width + CARD_SPACING_PX;
        let usable = (self.viewport.layout_width() - CARD_SPACING_PX).max(0.0);
        ((usable / slot).floor() as usize).max(1)
    }
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: &str) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback.to_string();
        } else {
            *value = normalized;
        }
    }

    config.batch_size = config.batch_size.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE);
    config.scroll_threshold = if config.scroll_threshold.is_finite() {
        config.scroll_threshold.max(0.0)
    } else {
        crate::config::AppConfig::default().scroll_threshold
    };
    config.scroll_load_delay_ms = config.scroll_load_delay_ms.min(MAX_SCROLL_LOAD_DELAY_MS);
    config.tap_hold_ms = config.tap_hold_ms.min(MAX_TAP_HOLD_MS);
    config.load_retries = config.load_retries.min(10);
    config.card_width = config.card_width.clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);
    config.cover_height = config.cover_height.clamp(MIN_COVER_HEIGHT, MAX_COVER_HEIGHT);
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    normalize_key_binding(&mut config.key_list_view, "l");
    normalize_key_binding(&mut config.key_grid_view, "g");
    normalize_key_binding(&mut config.key_toggle_theme, "t");
    let source = config.catalog_source.trim();
    config.catalog_source = if source.is_empty() {
        crate::config::AppConfig::default().catalog_source
    } else {
        source.to_string()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_config() {
        let mut config = AppConfig::default();
        config.batch_size = 0;
        config.scroll_threshold = f32::NAN;
        config.tap_hold_ms = 60_000;
        config.catalog_source = "   ".to_string();
        clamp_config(&mut config);
        assert_eq!(config.batch_size, 1);
        assert_eq!(config.scroll_threshold, 100.0);
        assert_eq!(config.tap_hold_ms, MAX_TAP_HOLD_MS);
        assert_eq!(config.catalog_source, "books.json");
    }

    #[test]
    fn grid_columns_follow_layout_width() {
        let mut config = AppConfig::default();
        config.card_width = 200.0;
        let mut app = App::new(config);
        app.viewport.viewport_width = 1000.0;
        assert_eq!(app.grid_columns(), 4);
        app.viewport.viewport_width = 100.0;
        assert_eq!(app.grid_columns(), 1);
    }
}
