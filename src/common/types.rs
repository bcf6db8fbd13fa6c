use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
}

/// One transcript line as the server sends it: `[sender, text]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage(pub String, pub String);

impl IncomingMessage {
    #[cfg(test)]
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self(sender.into(), text.into())
    }

    pub fn sender(&self) -> &str {
        &self.0
    }

    pub fn text(&self) -> &str {
        &self.1
    }
}

/// Id of the newest message the client has seen.
///
/// The server owns the numbering: each successful poll replaces the cursor
/// with whatever the response carries, it is never advanced locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollCursor(i64);

impl PollCursor {
    /// Nothing seen yet.
    pub const INITIAL: Self = Self(-1);

    #[cfg(test)]
    pub fn new(last_message_id: i64) -> Self {
        Self(last_message_id)
    }

    pub fn last_message_id(self) -> i64 {
        self.0
    }
}

impl Default for PollCursor {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Body of `POST /messages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollRequest {
    pub last_message_id: PollCursor,
}

/// Reply to `POST /messages`, oldest message first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResponse {
    pub last_message_id: PollCursor,
    #[serde(default)]
    pub messages: Vec<IncomingMessage>,
}
