pub(crate) fn default_catalog_source() -> String {
    "books.json".to_string()
}

pub(crate) fn default_load_retries() -> u32 {
    0
}

pub(crate) fn default_retry_backoff_ms() -> u64 {
    500
}

pub(crate) fn default_batch_size() -> usize {
    10
}

pub(crate) fn default_scroll_threshold() -> f32 {
    100.0
}

pub(crate) fn default_scroll_load_delay_ms() -> u64 {
    800
}

pub(crate) fn default_description_preview_chars() -> usize {
    150
}

pub(crate) fn default_tap_hold_ms() -> u64 {
    200
}

pub(crate) fn default_key_list_view() -> String {
    "l".to_string()
}

pub(crate) fn default_key_grid_view() -> String {
    "g".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_card_width() -> f32 {
    220.0
}

pub(crate) fn default_cover_height() -> f32 {
    160.0
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
