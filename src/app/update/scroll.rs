use super::super::state::App;
use super::Effect;
use std::time::Duration;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let offset_y = sanitize(offset_y);
        if offset_y != self.viewport.offset_y {
            if let Some(pending) = self.tap.cancel() {
                debug!(pending, "List scrolled during touch; tap ignored");
            }
        }
        self.viewport.offset_y = offset_y;
        self.viewport.viewport_width = sanitize(viewport_width);
        self.viewport.viewport_height = sanitize(viewport_height);
        self.viewport.content_height = sanitize(content_height);

        let distance = distance_to_bottom(
            self.viewport.offset_y,
            self.viewport.viewport_height,
            self.viewport.content_height,
        );
        if distance <= self.config.scroll_threshold {
            self.trigger_scroll_load(effects);
        }
    }

    /// Schedule the next batch behind the simulated delay, unless a load is
    /// already in flight or everything is rendered.
    pub(super) fn trigger_scroll_load(&mut self, effects: &mut Vec<Effect>) {
        if self.list.loading || !self.list.has_more() {
            return;
        }
        self.list.loading = true;
        info!(
            displayed = self.list.displayed,
            total = self.list.books.len(),
            "Near bottom, loading more books"
        );
        effects.push(Effect::ScheduleBatch {
            delay: Duration::from_millis(self.config.scroll_load_delay_ms),
        });
    }

    pub(super) fn handle_batch_delay_elapsed(&mut self, effects: &mut Vec<Effect>) {
        if !self.list.loading {
            debug!("Batch timer fired with no load in flight");
            return;
        }
        self.list.loading = false;
        self.render_batch(effects);
    }
}

/// Layout units between the bottom edge of the viewport and the end of the
/// content. Never negative.
pub(super) fn distance_to_bottom(offset_y: f32, viewport_height: f32, content_height: f32) -> f32 {
    (content_height - (offset_y + viewport_height)).max(0.0)
}
