use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::CatalogLoaded(result) => self.handle_catalog_loaded(result, &mut effects),
            Message::Scrolled {
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
            } => self.handle_scrolled(
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
                &mut effects,
            ),
            Message::BatchDelayElapsed => self.handle_batch_delay_elapsed(&mut effects),
            Message::SetViewMode(mode) => self.handle_set_view_mode(mode),
            Message::CardPressed(idx) => self.handle_card_pressed(idx, &mut effects),
            Message::PointerReleased => self.handle_pointer_released(),
            Message::TapHoldElapsed { token } => self.handle_tap_hold_elapsed(token, &mut effects),
            Message::CloseDetail => self.handle_close_detail(),
            Message::OpenReadLink => self.handle_open_read_link(&mut effects),
            Message::ReadLinkOpened { url, result } => self.handle_read_link_opened(url, result),
            Message::CoverLoaded { source, result } => self.handle_cover_loaded(source, result),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }

        effects
    }
}
