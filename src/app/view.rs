use super::messages::Message;
use super::state::{
    App, BOOK_SCROLL_ID, CARD_SPACING_PX, CoverSlot, DETAIL_COVER_HEIGHT_PX, DETAIL_WIDTH_PX,
    LIST_COVER_WIDTH_PX, RenderedCard,
};
use crate::config::{ThemeMode, ViewMode};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image as cover_image;
use iced::widget::image::Handle;
use iced::widget::{
    Column, Row, button, center, column, container, horizontal_space, mouse_area, opaque, row,
    scrollable, stack, text,
};
use iced::{Color, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let shelf = scrollable(
            column![self.cards_view(), self.loading_indicator()]
                .spacing(CARD_SPACING_PX)
                .padding(CARD_SPACING_PX)
                .width(Length::Fill),
        )
        .on_scroll(|viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_width: viewport.bounds().width,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .id(BOOK_SCROLL_ID.clone())
        .height(Length::Fill);

        let base = column![
            self.toolbar(),
            text(self.status_label()).size(14),
            shelf
        ]
        .padding(16)
        .spacing(12)
        .height(Length::Fill);

        if self.detail.visible {
            modal(base, self.detail_panel(), Message::CloseDetail)
        } else {
            base.into()
        }
    }
}

impl App {
    fn toolbar(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        row![
            text("Book Shelf").size(24),
            horizontal_space(),
            self.view_toggle(ViewMode::List),
            self.view_toggle(ViewMode::Grid),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    /// The toggle for the active mode is drawn as primary.
    fn view_toggle(&self, mode: ViewMode) -> Element<'_, Message> {
        let style: fn(&Theme, button::Status) -> button::Style = if self.list.view_mode == mode {
            button::primary
        } else {
            button::secondary
        };
        button(text(mode.to_string()))
            .style(style)
            .on_press(Message::SetViewMode(mode))
            .into()
    }

    fn status_label(&self) -> String {
        if !self.list.catalog_loaded {
            return if self.list.loading {
                "Loading books...".to_string()
            } else {
                String::new()
            };
        }
        format!(
            "Showing {} of {} books",
            self.list.displayed,
            self.list.books.len()
        )
    }

    fn loading_indicator(&self) -> Element<'_, Message> {
        if !self.list.loading {
            return Column::new().into();
        }
        container(text("Loading...").size(16))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(12)
            .into()
    }

    fn cards_view(&self) -> Element<'_, Message> {
        match self.list.view_mode {
            ViewMode::List => Column::with_children(self.list.cards.iter().map(|card| self.card(card)))
                .spacing(CARD_SPACING_PX)
                .width(Length::Fill)
                .into(),
            ViewMode::Grid => {
                let columns = self.grid_columns();
                let rows = self.list.cards.chunks(columns).map(|chunk| -> Element<'_, Message> {
                    Row::with_children(chunk.iter().map(|card| self.card(card)))
                        .spacing(CARD_SPACING_PX)
                        .into()
                });
                Column::with_children(rows)
                    .spacing(CARD_SPACING_PX)
                    .width(Length::Fill)
                    .into()
            }
        }
    }

    fn card<'a>(&'a self, card: &'a RenderedCard) -> Element<'a, Message> {
        let Some(book) = self.list.book(card.book_idx) else {
            return Column::new().into();
        };
        let source = self.cover_source_for(card.book_idx);

        let info = column![
            text(book.title.as_str()).size(18),
            text(format!("by {}", book.author)).size(14),
            text(card.preview.as_str()).size(13),
        ]
        .spacing(4);

        let (content, width): (Element<'a, Message>, Length) = match card.view_mode {
            ViewMode::List => (
                row![
                    self.cover(
                        source.as_deref(),
                        &book.title,
                        LIST_COVER_WIDTH_PX,
                        self.config.cover_height
                    ),
                    info.width(Length::Fill)
                ]
                .spacing(12)
                .into(),
                Length::Fill,
            ),
            ViewMode::Grid => (
                column![
                    self.cover(
                        source.as_deref(),
                        &book.title,
                        self.config.card_width - 24.0,
                        self.config.cover_height
                    ),
                    info
                ]
                .spacing(8)
                .align_x(Horizontal::Center)
                .into(),
                Length::Fixed(self.config.card_width),
            ),
        };

        mouse_area(
            container(content)
                .padding(12)
                .width(width)
                .style(container::rounded_box),
        )
        .on_press(Message::CardPressed(card.book_idx))
        .into()
    }

    fn cover(
        &self,
        source: Option<&str>,
        alt: &str,
        width: f32,
        height: f32,
    ) -> Element<'_, Message> {
        let slot = source.and_then(|source| self.covers.get(source));
        if let Some(CoverSlot::Ready(path)) = slot {
            return cover_image(Handle::from_path(path.clone()))
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .into();
        }

        let label = match slot {
            Some(CoverSlot::Loading) => "Loading cover...".to_string(),
            _ => alt.to_string(),
        };
        container(text(label).size(12))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(container::bordered_box)
            .into()
    }

    fn detail_panel(&self) -> Element<'_, Message> {
        let detail = &self.detail;

        let header = row![
            self.cover(
                Some(detail.cover_source.as_str()),
                &detail.cover_alt,
                DETAIL_COVER_HEIGHT_PX * 0.7,
                DETAIL_COVER_HEIGHT_PX
            ),
            column![
                text(detail.title.as_str()).size(24),
                text(format!("by {}", detail.author)).size(16),
                text(format!("Published: {}", detail.published_date)).size(14),
                text(format!("Pages: {}", detail.page_count)).size(14),
            ]
            .spacing(6)
            .width(Length::Fill),
        ]
        .spacing(16);

        let description = scrollable(text(detail.description.as_str()).size(15))
            .height(Length::Fixed(200.0));

        let actions = row![
            button("Read").on_press(Message::OpenReadLink),
            horizontal_space(),
            button("Close")
                .style(button::secondary)
                .on_press(Message::CloseDetail),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        container(column![header, description, actions].spacing(16))
            .width(Length::Fixed(DETAIL_WIDTH_PX))
            .padding(20)
            .style(container::rounded_box)
            .into()
    }
}

/// Lay `content` over a dimmed copy of `base`; a press on the backdrop emits
/// `on_blur`.
fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
