use super::super::state::App;
use super::Effect;
use crate::catalog::Book;
use std::time::Duration;
use tracing::{debug, error, info, warn};

impl App {
    /// Raise the loading flag and request the catalog.
    pub(in crate::app) fn begin_catalog_load(&mut self, effects: &mut Vec<Effect>) {
        if self.list.catalog_loaded || self.list.loading {
            return;
        }
        self.list.loading = true;
        info!(source = %self.config.catalog_source, "Fetching catalog");
        effects.push(Effect::LoadCatalog {
            source: self.config.catalog_source.clone(),
            retries: self.config.load_retries,
            backoff: Duration::from_millis(self.config.retry_backoff_ms),
        });
    }

    pub(super) fn handle_catalog_loaded(
        &mut self,
        result: Result<Vec<Book>, String>,
        effects: &mut Vec<Effect>,
    ) {
        self.list.loading = false;
        match result {
            Ok(books) => {
                let count = books.len();
                if !self.list.set_books(books) {
                    warn!("Ignoring catalog delivered after the first load");
                    return;
                }
                info!(count, "Catalog ready");
                self.render_batch(effects);
            }
            Err(err) => {
                error!(source = %self.config.catalog_source, "Error fetching books: {err}");
            }
        }
    }

    /// Append the next batch and request covers for the new cards.
    pub(super) fn render_batch(&mut self, effects: &mut Vec<Effect>) {
        let rendered = self.list.render_next_batch();
        if rendered.is_empty() {
            return;
        }
        debug!(
            start = rendered.start,
            end = rendered.end,
            total = self.list.books.len(),
            "Rendered batch"
        );
        for idx in rendered {
            self.queue_cover(idx, effects);
        }
    }

    pub(super) fn queue_cover(&mut self, book_idx: usize, effects: &mut Vec<Effect>) {
        let Some(source) = self.cover_source_for(book_idx) else {
            return;
        };
        if source.trim().is_empty() {
            return;
        }
        if self.covers.request(&source) {
            effects.push(Effect::LoadCover { source });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::state::sample_books;
    use crate::config::AppConfig;

    #[test]
    fn bootstrap_requests_catalog_with_loading_flag() {
        let mut app = App::new(AppConfig::default());
        let mut effects = Vec::new();
        app.begin_catalog_load(&mut effects);

        assert!(app.list.loading);
        assert_eq!(
            effects,
            vec![Effect::LoadCatalog {
                source: "books.json".to_string(),
                retries: 0,
                backoff: Duration::from_millis(500),
            }]
        );

        let mut again = Vec::new();
        app.begin_catalog_load(&mut again);
        assert!(again.is_empty());
    }

    #[test]
    fn successful_load_renders_first_batch_and_clears_flag() {
        let mut app = App::new(AppConfig::default());
        let mut effects = Vec::new();
        app.begin_catalog_load(&mut effects);

        let effects = app.reduce(Message::CatalogLoaded(Ok(sample_books(25))));

        assert!(!app.list.loading);
        assert_eq!(app.list.displayed, 10);
        assert_eq!(app.list.cards.len(), 10);
        let covers = effects
            .iter()
            .filter(|effect| matches!(effect, Effect::LoadCover { .. }))
            .count();
        assert_eq!(covers, 10);
    }

    #[test]
    fn failed_load_leaves_collection_empty() {
        let mut app = App::new(AppConfig::default());
        let mut effects = Vec::new();
        app.begin_catalog_load(&mut effects);

        let effects = app.reduce(Message::CatalogLoaded(Err("connection refused".to_string())));

        assert!(effects.is_empty());
        assert!(!app.list.loading);
        assert!(app.list.books.is_empty());
        assert_eq!(app.list.displayed, 0);
        assert!(!app.list.catalog_loaded);
    }

    #[test]
    fn shared_cover_is_requested_once() {
        let mut app = App::new(AppConfig::default());
        let mut books = sample_books(3);
        for book in &mut books {
            book.cover_url = "covers/shared.jpg".to_string();
        }
        let effects = app.reduce(Message::CatalogLoaded(Ok(books)));
        assert_eq!(
            effects,
            vec![Effect::LoadCover {
                source: "covers/shared.jpg".to_string()
            }]
        );
    }
}
