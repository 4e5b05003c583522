use super::super::super::messages::Message;
use super::super::super::state::{App, DETAIL_COVER_HEIGHT_PX};
use super::super::Effect;
use crate::catalog::load_books_with_retry;
use crate::covers::load_cover;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::window;
use tracing::debug;

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadCatalog {
                source,
                retries,
                backoff,
            } => Task::perform(
                async move {
                    match load_books_with_retry(source, retries, backoff).await {
                        Ok(books) => Message::CatalogLoaded(Ok(books)),
                        Err(err) => Message::CatalogLoaded(Err(format!("{err:#}"))),
                    }
                },
                |message| message,
            ),
            Effect::ScheduleBatch { delay } => {
                if delay.is_zero() {
                    Task::done(Message::BatchDelayElapsed)
                } else {
                    Task::perform(
                        async move {
                            tokio::time::sleep(delay).await;
                            Message::BatchDelayElapsed
                        },
                        |message| message,
                    )
                }
            }
            Effect::StartTapTimer { token, delay } => Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    Message::TapHoldElapsed { token }
                },
                |message| message,
            ),
            Effect::LoadCover { source } => {
                let cache_root = self.cache_root.clone();
                let (max_width, max_height) = self.cover_thumbnail_size();
                Task::perform(
                    async move {
                        let result = load_cover(source.clone(), cache_root, max_width, max_height)
                            .await
                            .map_err(|err| format!("{err:#}"));
                        Message::CoverLoaded { source, result }
                    },
                    |message| message,
                )
            }
            Effect::OpenExternal(url) => {
                debug!(%url, "Opening external link");
                Task::perform(
                    async move {
                        let target = url.clone();
                        let result = match tokio::task::spawn_blocking(move || {
                            webbrowser::open(&target)
                        })
                        .await
                        {
                            Ok(Ok(())) => Ok(()),
                            Ok(Err(err)) => Err(err.to_string()),
                            Err(err) => Err(format!("browser launch task failed: {err}")),
                        };
                        Message::ReadLinkOpened { url, result }
                    },
                    |message| message,
                )
            }
        }
    }

    /// Thumbnails are sized for the detail overlay so cards and overlay share
    /// one cached file.
    fn cover_thumbnail_size(&self) -> (u32, u32) {
        let height = self.config.cover_height.max(DETAIL_COVER_HEIGHT_PX);
        let width = self.config.card_width.max(height * 0.75);
        (width.round() as u32, height.round() as u32)
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::PointerReleased)
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status != event::Status::Captured =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
