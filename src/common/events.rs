use super::types::IncomingMessage;

/// Events the network task sends up to the UI.
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    /// One successful poll; may be empty.
    MessagesReceived(Vec<IncomingMessage>),
}
