//! Scroll position bookkeeping for the message list.
//!
//! Offsets are measured downward from the top of the content, in logical
//! pixels. A bottom request names how many messages must be on screen; it
//! stays pending until a layout pass reports at least that many, so a frame
//! laid out before the append can't satisfy it with a stale maximum.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollModel {
    offset: f32,
    max_offset: f32,
    pending_until: Option<usize>,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for the view to end up at the bottom once a layout containing
    /// `message_count` messages has settled.
    pub fn request_bottom(&mut self, message_count: usize) {
        let needed = self.pending_until.map_or(message_count, |n| n.max(message_count));
        self.pending_until = Some(needed);
    }

    pub fn is_pending(&self) -> bool {
        self.pending_until.is_some()
    }

    /// Record the maximum offset from a finished layout pass of
    /// `laid_out_count` messages and apply a pending bottom request if that
    /// layout includes everything it asked for. Returns `true` if the offset
    /// was moved.
    pub fn layout_settled(&mut self, max_offset: f32, laid_out_count: usize) -> bool {
        self.max_offset = max_offset.max(0.0);
        match self.pending_until {
            Some(needed) if laid_out_count >= needed => {
                self.pending_until = None;
                self.offset = self.max_offset;
                true
            }
            _ => {
                self.offset = self.offset.min(self.max_offset);
                false
            }
        }
    }

    /// User-driven scrolling, clamped to the content.
    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset);
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn is_at_bottom(&self) -> bool {
        (self.max_offset - self.offset).abs() < 0.5
    }
}
