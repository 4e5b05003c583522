use crate::catalog::Book;
use crate::config::ViewMode;
use crate::text_utils::preview_text;
use std::ops::Range;

/// A summary card that has been appended to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub(in crate::app) book_idx: usize,
    pub(in crate::app) preview: String,
    pub(in crate::app) view_mode: ViewMode,
}

/// Catalog, display cursor, and rendered cards.
///
/// `displayed` always equals `cards.len()` and never exceeds `books.len()`.
pub struct ListState {
    pub(in crate::app) books: Vec<Book>,
    pub(in crate::app) catalog_loaded: bool,
    pub(in crate::app) displayed: usize,
    pub(in crate::app) cards: Vec<RenderedCard>,
    pub(in crate::app) loading: bool,
    pub(in crate::app) view_mode: ViewMode,
    pub(in crate::app) batch_size: usize,
    pub(in crate::app) preview_chars: usize,
}

impl ListState {
    pub(in crate::app) fn new(view_mode: ViewMode, batch_size: usize, preview_chars: usize) -> Self {
        Self {
            books: Vec::new(),
            catalog_loaded: false,
            displayed: 0,
            cards: Vec::new(),
            loading: false,
            view_mode,
            batch_size: batch_size.max(1),
            preview_chars,
        }
    }

    /// Install the catalog. Only the first successful load is accepted.
    pub(in crate::app) fn set_books(&mut self, books: Vec<Book>) -> bool {
        if self.catalog_loaded {
            return false;
        }
        self.books = books;
        self.catalog_loaded = true;
        true
    }

    pub(in crate::app) fn has_more(&self) -> bool {
        self.displayed < self.books.len()
    }

    /// Append the next batch of cards and return the book indices rendered.
    pub(in crate::app) fn render_next_batch(&mut self) -> Range<usize> {
        let start = self.displayed;
        if self.loading || !self.has_more() {
            return start..start;
        }
        let end = (start + self.batch_size).min(self.books.len());
        for idx in start..end {
            let card = self.create_card(idx);
            self.cards.push(card);
        }
        self.displayed = end;
        start..end
    }

    pub(in crate::app) fn create_card(&self, book_idx: usize) -> RenderedCard {
        let preview = self
            .books
            .get(book_idx)
            .map(|book| preview_text(&book.description, self.preview_chars))
            .unwrap_or_default();
        RenderedCard {
            book_idx,
            preview,
            view_mode: self.view_mode,
        }
    }

    /// Switch modes and re-tag every rendered card.
    pub(in crate::app) fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        for card in &mut self.cards {
            card.view_mode = mode;
        }
    }

    pub(in crate::app) fn book(&self, idx: usize) -> Option<&Book> {
        self.books.get(idx)
    }
}

#[cfg(test)]
pub(in crate::app) fn sample_books(count: usize) -> Vec<Book> {
    (0..count)
        .map(|i| Book {
            title: format!("Book {i}"),
            author: format!("Author {i}"),
            description: format!("Description for book {i}. ").repeat(12),
            cover_url: format!("covers/{i}.jpg"),
            published_date: format!("19{:02}-01-01", i % 100),
            page_count: 100 + i as u32,
            read_link: format!("https://example.com/books/{i}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(count: usize) -> ListState {
        let mut list = ListState::new(ViewMode::List, 10, 150);
        assert!(list.set_books(sample_books(count)));
        list
    }

    #[test]
    fn cursor_converges_to_collection_length() {
        for count in [0usize, 1, 9, 10, 11, 25, 57] {
            let mut list = loaded(count);
            let mut previous = list.displayed;
            for _ in 0..10 {
                let expected_step = 10.min(count - list.displayed);
                let range = list.render_next_batch();
                assert_eq!(range.len(), expected_step);
                assert_eq!(list.displayed, previous + expected_step);
                assert!(list.displayed <= count);
                assert_eq!(list.cards.len(), list.displayed);
                previous = list.displayed;
            }
            assert_eq!(list.displayed, count);
        }
    }

    #[test]
    fn cards_follow_collection_order() {
        let mut list = loaded(25);
        list.render_next_batch();
        list.render_next_batch();
        let indices: Vec<usize> = list.cards.iter().map(|card| card.book_idx).collect();
        assert_eq!(indices, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn no_render_while_loading() {
        let mut list = loaded(25);
        list.loading = true;
        assert!(list.render_next_batch().is_empty());
        assert_eq!(list.displayed, 0);
    }

    #[test]
    fn second_catalog_is_ignored() {
        let mut list = loaded(3);
        assert!(!list.set_books(sample_books(30)));
        assert_eq!(list.books.len(), 3);
    }

    #[test]
    fn cards_carry_truncated_preview() {
        let mut list = loaded(1);
        list.render_next_batch();
        let card = &list.cards[0];
        assert_eq!(card.preview.chars().count(), 153);
        assert!(card.preview.ends_with("..."));
    }

    #[test]
    fn view_mode_retags_existing_and_future_cards() {
        let mut list = loaded(15);
        list.render_next_batch();
        list.set_view_mode(ViewMode::Grid);
        let once = list.cards.clone();
        list.set_view_mode(ViewMode::Grid);
        assert_eq!(list.cards, once);
        assert!(list.cards.iter().all(|card| card.view_mode == ViewMode::Grid));

        list.render_next_batch();
        assert!(list.cards.iter().all(|card| card.view_mode == ViewMode::Grid));
        assert_eq!(list.books.len(), 15);
    }
}
