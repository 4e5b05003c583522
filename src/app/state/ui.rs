use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverSlot {
    Loading,
    Ready(PathBuf),
    Failed,
}

/// Cover thumbnails keyed by resolved cover source.
#[derive(Debug, Default)]
pub struct CoverState {
    pub(in crate::app) slots: HashMap<String, CoverSlot>,
}

impl CoverState {
    /// Mark `source` as loading. Returns false when it was already requested.
    pub(in crate::app) fn request(&mut self, source: &str) -> bool {
        if self.slots.contains_key(source) {
            return false;
        }
        self.slots.insert(source.to_string(), CoverSlot::Loading);
        true
    }

    pub(in crate::app) fn get(&self, source: &str) -> Option<&CoverSlot> {
        self.slots.get(source)
    }
}

/// Last measured scroll geometry and window width.
#[derive(Debug, Clone, Copy)]
pub struct ViewportState {
    pub(in crate::app) offset_y: f32,
    pub(in crate::app) viewport_width: f32,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) content_height: f32,
    pub(in crate::app) window_width: f32,
}

impl ViewportState {
    pub(in crate::app) fn new(window_width: f32) -> Self {
        Self {
            offset_y: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            content_height: 0.0,
            window_width,
        }
    }

    /// Width available to cards; falls back to the window before the first
    /// scroll measurement arrives.
    pub(in crate::app) fn layout_width(&self) -> f32 {
        if self.viewport_width > 0.0 {
            self.viewport_width
        } else {
            self.window_width
        }
    }
}
