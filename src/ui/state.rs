use crate::common::IncomingMessage;

/// Local UI state.
pub struct AppState {
    pub transcript: Vec<IncomingMessage>,
    pub input_text: String,
    /// Input field wants keyboard focus on the next frame.
    pub focus_input: bool,
    scroll_pending: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            input_text: String::new(),
            focus_input: true,
            scroll_pending: false,
        }
    }

    /// Appends one poll's batch in order, then queues a scroll to the bottom.
    pub fn push_batch(&mut self, batch: Vec<IncomingMessage>) {
        self.transcript.extend(batch);
        self.scroll_pending = true;
    }

    /// Whether this frame should scroll the transcript; clears the request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}
