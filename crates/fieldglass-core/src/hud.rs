//! Posting to the host HUD with blank and duplicate suppression.

use fieldglass_types::HudMessage;

// ---------------------------------------------------------------------------
// HudSink
// ---------------------------------------------------------------------------

/// The host's transient notification queue.
pub trait HudSink {
    /// Whether a message with exactly this text is currently showing.
    fn is_showing(&self, text: &str) -> bool;

    /// Add a message to the queue.
    fn show(&mut self, message: HudMessage);
}

/// Post a message unless it is blank or already showing.
///
/// Suppresses the post when the text is empty or whitespace-only, or when
/// a message with identical text is still on screen (exact string
/// equality). Returns whether the message was handed to the sink.
pub fn post_transient(sink: &mut impl HudSink, message: HudMessage) -> bool {
    if message.text.trim().is_empty() {
        return false;
    }
    if sink.is_showing(&message.text) {
        return false;
    }
    sink.show(message);
    true
}

// ---------------------------------------------------------------------------
// TransientFeed
// ---------------------------------------------------------------------------

/// An in-memory [`HudSink`] for tests and hosts without their own queue.
///
/// Messages stay "showing" until [`dismiss_all`](Self::dismiss_all) is
/// called; expiry timing belongs to the host's render loop, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransientFeed {
    /// Currently showing messages, oldest first.
    messages: Vec<HudMessage>,
}

impl TransientFeed {
    /// Create an empty feed.
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// The currently showing messages, oldest first.
    pub fn messages(&self) -> &[HudMessage] {
        &self.messages
    }

    /// Number of messages currently showing.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing is currently showing.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Clear every showing message.
    pub fn dismiss_all(&mut self) {
        self.messages.clear();
    }
}

impl HudSink for TransientFeed {
    fn is_showing(&self, text: &str) -> bool {
        self.messages.iter().any(|message| message.text == text)
    }

    fn show(&mut self, message: HudMessage) {
        self.messages.push(message);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
