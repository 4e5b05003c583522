use serde::Deserialize;

/// Flattened application configuration; built from the TOML tables in
/// `tables.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog_source: String,
    pub load_retries: u32,
    pub retry_backoff_ms: u64,
    pub batch_size: usize,
    pub scroll_threshold: f32,
    pub scroll_load_delay_ms: u64,
    pub description_preview_chars: usize,
    pub default_view: ViewMode,
    pub touch_input: bool,
    pub tap_hold_ms: u64,
    pub key_list_view: String,
    pub key_grid_view: String,
    pub key_toggle_theme: String,
    pub theme: ThemeMode,
    pub card_width: f32,
    pub cover_height: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_source: crate::config::defaults::default_catalog_source(),
            load_retries: crate::config::defaults::default_load_retries(),
            retry_backoff_ms: crate::config::defaults::default_retry_backoff_ms(),
            batch_size: crate::config::defaults::default_batch_size(),
            scroll_threshold: crate::config::defaults::default_scroll_threshold(),
            scroll_load_delay_ms: crate::config::defaults::default_scroll_load_delay_ms(),
            description_preview_chars:
                crate::config::defaults::default_description_preview_chars(),
            default_view: ViewMode::List,
            touch_input: false,
            tap_hold_ms: crate::config::defaults::default_tap_hold_ms(),
            key_list_view: crate::config::defaults::default_key_list_view(),
            key_grid_view: crate::config::defaults::default_key_grid_view(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            theme: ThemeMode::Day,
            card_width: crate::config::defaults::default_card_width(),
            cover_height: crate::config::defaults::default_cover_height(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// How book cards are laid out.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ViewMode::List => "List",
            ViewMode::Grid => "Grid",
        };
        write!(f, "{}", label)
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
