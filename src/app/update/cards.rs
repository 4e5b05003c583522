use super::super::state::{App, CoverSlot};
use super::Effect;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_card_pressed(&mut self, book_idx: usize, effects: &mut Vec<Effect>) {
        if book_idx >= self.list.displayed {
            return;
        }
        if self.touch_input {
            let token = self.tap.begin(book_idx);
            effects.push(Effect::StartTapTimer {
                token,
                delay: Duration::from_millis(self.config.tap_hold_ms),
            });
        } else {
            self.open_detail(book_idx, effects);
        }
    }

    /// A release anywhere ends the touch, so any armed hold is dropped.
    pub(super) fn handle_pointer_released(&mut self) {
        if let Some(pending) = self.tap.cancel() {
            debug!(pending, "Touch ended before hold; tap ignored");
        }
    }

    pub(super) fn handle_tap_hold_elapsed(&mut self, token: u64, effects: &mut Vec<Effect>) {
        if let Some(book_idx) = self.tap.fire(token) {
            self.open_detail(book_idx, effects);
        }
    }

    pub(super) fn open_detail(&mut self, book_idx: usize, effects: &mut Vec<Effect>) {
        let Some(cover_source) = self.cover_source_for(book_idx) else {
            return;
        };
        let Some(book) = self.list.book(book_idx) else {
            return;
        };
        self.detail.open(book_idx, book, cover_source);
        info!(book_idx, title = %self.detail.title, "Opened book detail");
        self.queue_cover(book_idx, effects);
    }

    pub(super) fn handle_close_detail(&mut self) {
        if self.detail.visible {
            debug!("Closed book detail");
        }
        self.detail.close();
    }

    pub(super) fn handle_open_read_link(&mut self, effects: &mut Vec<Effect>) {
        if !self.detail.visible {
            return;
        }
        let link = self.detail.read_link.trim();
        if link.is_empty() {
            warn!(title = %self.detail.title, "Book has no read link");
            return;
        }
        effects.push(Effect::OpenExternal(link.to_string()));
    }

    pub(super) fn handle_read_link_opened(&mut self, url: String, result: Result<(), String>) {
        match result {
            Ok(()) => info!(%url, "Opened read link"),
            Err(err) => warn!(%url, "Failed to open link in browser: {err}"),
        }
    }

    pub(super) fn handle_cover_loaded(&mut self, source: String, result: Result<PathBuf, String>) {
        let slot = match result {
            Ok(path) => CoverSlot::Ready(path),
            Err(err) => {
                warn!(%source, "Cover unavailable: {err}");
                CoverSlot::Failed
            }
        };
        self.covers.slots.insert(source, slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::state::sample_books;
    use crate::catalog::Book;
    use crate::config::AppConfig;

    fn app_with(books: Vec<Book>, touch: bool) -> App {
        let mut config = AppConfig::default();
        config.touch_input = touch;
        let mut app = App::new(config);
        app.reduce(Message::CatalogLoaded(Ok(books)));
        app
    }

    fn dune() -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Desert planet.".to_string(),
            cover_url: "covers/dune.jpg".to_string(),
            published_date: "1965-08-01".to_string(),
            page_count: 412,
            read_link: "https://example.com/dune".to_string(),
        }
    }

    fn tap_token(effects: &[Effect]) -> u64 {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::StartTapTimer { token, .. } => Some(*token),
                _ => None,
            })
            .expect("tap timer effect")
    }

    #[test]
    fn click_opens_immediately_without_touch() {
        let mut books = sample_books(3);
        books[1] = dune();
        let mut app = app_with(books, false);

        app.reduce(Message::CardPressed(1));

        assert!(app.detail.visible);
        assert_eq!(app.detail.title, "Dune");
        assert_eq!(app.detail.author, "Frank Herbert");
        assert_eq!(app.detail.page_count, 412);
        assert_eq!(app.detail.published_date, "1965-08-01");
        assert_eq!(app.detail.read_link, "https://example.com/dune");
        assert_eq!(app.detail.cover_source, "covers/dune.jpg");
    }

    #[test]
    fn touch_release_before_hold_does_not_open() {
        let mut app = app_with(sample_books(3), true);

        let effects = app.reduce(Message::CardPressed(0));
        assert_eq!(
            effects,
            vec![Effect::StartTapTimer {
                token: tap_token(&effects),
                delay: Duration::from_millis(200),
            }]
        );
        let token = tap_token(&effects);
        app.reduce(Message::PointerReleased);
        app.reduce(Message::TapHoldElapsed { token });

        assert!(!app.detail.visible);
    }

    #[test]
    fn touch_scroll_gesture_does_not_open() {
        let mut app = app_with(sample_books(25), true);

        let token = tap_token(&app.reduce(Message::CardPressed(0)));
        app.reduce(Message::Scrolled {
            offset_y: 40.0,
            viewport_width: 900.0,
            viewport_height: 600.0,
            content_height: 2050.0,
        });
        app.reduce(Message::TapHoldElapsed { token });

        assert!(!app.detail.visible);
    }

    #[test]
    fn scroll_report_without_movement_keeps_hold() {
        let mut app = app_with(sample_books(25), true);

        let token = tap_token(&app.reduce(Message::CardPressed(1)));
        app.reduce(Message::Scrolled {
            offset_y: 0.0,
            viewport_width: 900.0,
            viewport_height: 600.0,
            content_height: 2050.0,
        });
        app.reduce(Message::TapHoldElapsed { token });

        assert!(app.detail.visible);
        assert_eq!(app.detail.book_idx, Some(1));
    }

    #[test]
    fn release_away_from_card_cancels_hold() {
        let mut app = app_with(sample_books(3), true);

        let token = tap_token(&app.reduce(Message::CardPressed(2)));
        assert!(app.reduce(Message::PointerReleased).is_empty());
        app.reduce(Message::TapHoldElapsed { token });

        assert!(!app.detail.visible);
    }

    #[test]
    fn touch_hold_opens_exactly_once() {
        let mut app = app_with(sample_books(3), true);

        let token = tap_token(&app.reduce(Message::CardPressed(2)));
        assert!(!app.detail.visible);
        app.reduce(Message::TapHoldElapsed { token });
        assert!(app.detail.visible);
        assert_eq!(app.detail.book_idx, Some(2));

        app.reduce(Message::CloseDetail);
        app.reduce(Message::TapHoldElapsed { token });
        assert!(!app.detail.visible);
    }

    #[test]
    fn reopening_replaces_every_field() {
        let mut books = sample_books(2);
        books[0] = dune();
        let mut app = app_with(books, false);

        app.reduce(Message::CardPressed(0));
        app.reduce(Message::CloseDetail);
        assert!(!app.detail.visible);
        app.reduce(Message::CardPressed(1));

        assert_eq!(app.detail.title, "Book 1");
        assert_eq!(app.detail.author, "Author 1");
        assert_eq!(app.detail.page_count, 101);
        assert_eq!(app.detail.cover_alt, "Book 1");
        assert_eq!(app.detail.read_link, "https://example.com/books/1");
        assert_ne!(app.detail.description, "Desert planet.");
    }

    #[test]
    fn presses_on_unrendered_cards_are_ignored() {
        let mut app = app_with(sample_books(25), false);
        app.reduce(Message::CardPressed(15));
        assert!(!app.detail.visible);
    }

    #[test]
    fn read_link_only_from_visible_detail() {
        let mut app = app_with(vec![dune()], false);
        assert!(app.reduce(Message::OpenReadLink).is_empty());
        app.reduce(Message::CardPressed(0));
        assert_eq!(
            app.reduce(Message::OpenReadLink),
            vec![Effect::OpenExternal("https://example.com/dune".to_string())]
        );
    }

    #[test]
    fn browser_failure_leaves_overlay_open() {
        let mut app = app_with(vec![dune()], false);
        app.reduce(Message::CardPressed(0));
        let effects = app.reduce(Message::ReadLinkOpened {
            url: "https://example.com/dune".to_string(),
            result: Err("no browser found".to_string()),
        });
        assert!(effects.is_empty());
        assert!(app.detail.visible);
        assert_eq!(app.detail.title, "Dune");
    }

    #[test]
    fn failed_cover_is_recorded() {
        let mut app = app_with(vec![dune()], false);
        app.reduce(Message::CoverLoaded {
            source: "covers/dune.jpg".to_string(),
            result: Err("404".to_string()),
        });
        assert_eq!(app.covers.get("covers/dune.jpg"), Some(&CoverSlot::Failed));
    }
}
