use crate::catalog::Book;

/// Detail overlay model. Shows at most one record; fields stay stale while
/// hidden and are fully repopulated on every open.
#[derive(Debug, Default)]
pub struct DetailState {
    pub(in crate::app) visible: bool,
    pub(in crate::app) book_idx: Option<usize>,
    pub(in crate::app) title: String,
    pub(in crate::app) author: String,
    pub(in crate::app) published_date: String,
    pub(in crate::app) page_count: u32,
    pub(in crate::app) description: String,
    pub(in crate::app) cover_source: String,
    pub(in crate::app) cover_alt: String,
    pub(in crate::app) read_link: String,
}

impl DetailState {
    pub(in crate::app) fn open(&mut self, book_idx: usize, book: &Book, cover_source: String) {
        self.book_idx = Some(book_idx);
        self.title = book.title.clone();
        self.author = book.author.clone();
        self.published_date = book.published_date.clone();
        self.page_count = book.page_count;
        self.description = book.description.clone();
        self.cover_source = cover_source;
        self.cover_alt = book.title.clone();
        self.read_link = book.read_link.clone();
        self.visible = true;
    }

    pub(in crate::app) fn close(&mut self) {
        self.visible = false;
    }
}
