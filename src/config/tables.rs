use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode, ViewMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    catalog: CatalogConfig,
    #[serde(default)]
    list: ListConfig,
    #[serde(default)]
    input: InputConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            catalog_source: tables.catalog.source,
            load_retries: tables.catalog.load_retries,
            retry_backoff_ms: tables.catalog.retry_backoff_ms,
            batch_size: tables.list.batch_size,
            scroll_threshold: tables.list.scroll_threshold,
            scroll_load_delay_ms: tables.list.scroll_load_delay_ms,
            description_preview_chars: tables.list.description_preview_chars,
            default_view: tables.list.default_view,
            touch_input: tables.input.touch,
            tap_hold_ms: tables.input.tap_hold_ms,
            key_list_view: tables.input.key_list_view,
            key_grid_view: tables.input.key_grid_view,
            key_toggle_theme: tables.input.key_toggle_theme,
            theme: tables.appearance.theme,
            card_width: tables.appearance.card_width,
            cover_height: tables.appearance.cover_height,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogConfig {
    #[serde(default = "defaults::default_catalog_source")]
    source: String,
    #[serde(default = "defaults::default_load_retries")]
    load_retries: u32,
    #[serde(default = "defaults::default_retry_backoff_ms")]
    retry_backoff_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            source: defaults::default_catalog_source(),
            load_retries: defaults::default_load_retries(),
            retry_backoff_ms: defaults::default_retry_backoff_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ListConfig {
    #[serde(default = "defaults::default_batch_size")]
    batch_size: usize,
    #[serde(default = "defaults::default_scroll_threshold")]
    scroll_threshold: f32,
    #[serde(default = "defaults::default_scroll_load_delay_ms")]
    scroll_load_delay_ms: u64,
    #[serde(default = "defaults::default_description_preview_chars")]
    description_preview_chars: usize,
    #[serde(default)]
    default_view: ViewMode,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            batch_size: defaults::default_batch_size(),
            scroll_threshold: defaults::default_scroll_threshold(),
            scroll_load_delay_ms: defaults::default_scroll_load_delay_ms(),
            description_preview_chars: defaults::default_description_preview_chars(),
            default_view: ViewMode::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct InputConfig {
    #[serde(default)]
    touch: bool,
    #[serde(default = "defaults::default_tap_hold_ms")]
    tap_hold_ms: u64,
    #[serde(default = "defaults::default_key_list_view")]
    key_list_view: String,
    #[serde(default = "defaults::default_key_grid_view")]
    key_grid_view: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    key_toggle_theme: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            touch: false,
            tap_hold_ms: defaults::default_tap_hold_ms(),
            key_list_view: defaults::default_key_list_view(),
            key_grid_view: defaults::default_key_grid_view(),
            key_toggle_theme: defaults::default_key_toggle_theme(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_card_width")]
    card_width: f32,
    #[serde(default = "defaults::default_cover_height")]
    cover_height: f32,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            card_width: defaults::default_card_width(),
            cover_height: defaults::default_cover_height(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
