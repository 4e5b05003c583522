use crate::catalog::Book;
use crate::config::ViewMode;
use iced::keyboard::{Key, Modifiers};
use std::path::PathBuf;

/// Messages emitted by the UI and by finished tasks.
#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded(Result<Vec<Book>, String>),
    Scrolled {
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    },
    BatchDelayElapsed,
    SetViewMode(ViewMode),
    CardPressed(usize),
    /// Left button or finger lifted anywhere in the window.
    PointerReleased,
    TapHoldElapsed {
        token: u64,
    },
    CloseDetail,
    OpenReadLink,
    ReadLinkOpened {
        url: String,
        result: Result<(), String>,
    },
    CoverLoaded {
        source: String,
        result: Result<PathBuf, String>,
    },
    ToggleTheme,
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}
