use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Limits and layout constants for the shelf.
pub(crate) const MIN_BATCH_SIZE: usize = 1;
pub(crate) const MAX_BATCH_SIZE: usize = 200;
pub(crate) const MAX_SCROLL_LOAD_DELAY_MS: u64 = 10_000;
pub(crate) const MAX_TAP_HOLD_MS: u64 = 2_000;
pub(crate) const MIN_CARD_WIDTH: f32 = 120.0;
pub(crate) const MAX_CARD_WIDTH: f32 = 600.0;
pub(crate) const MIN_COVER_HEIGHT: f32 = 48.0;
pub(crate) const MAX_COVER_HEIGHT: f32 = 600.0;
pub(crate) const CARD_SPACING_PX: f32 = 12.0;
pub(crate) const LIST_COVER_WIDTH_PX: f32 = 96.0;
pub(crate) const DETAIL_WIDTH_PX: f32 = 560.0;
pub(crate) const DETAIL_COVER_HEIGHT_PX: f32 = 240.0;
pub(crate) static BOOK_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("book-scroll"));
