use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::{IncomingMessage, NetworkEvent, PollCursor, PollRequest};

use super::backend::{BackendError, ChatBackend};

/// One request/response cycle against `/messages`.
///
/// On success the returned cursor is the server's value verbatim. On failure
/// the caller keeps the cursor it passed in.
pub async fn poll_once<B: ChatBackend>(
    backend: &B,
    cursor: PollCursor,
) -> Result<(PollCursor, Vec<IncomingMessage>), BackendError> {
    let response = backend
        .fetch_messages(PollRequest {
            last_message_id: cursor,
        })
        .await?;

    if response.last_message_id < cursor {
        // Applied anyway: the server numbers messages, not us.
        log::warn!(
            "Server cursor went backwards ({} -> {})",
            cursor.last_message_id(),
            response.last_message_id.last_message_id()
        );
    }

    Ok((response.last_message_id, response.messages))
}

/// Polls forever at a fixed cadence, starting immediately.
///
/// Every cycle sleeps `interval` afterwards, success or not. Returns only
/// once the UI has dropped its event receiver.
pub async fn run<B: ChatBackend>(
    backend: Arc<B>,
    event_sender: mpsc::UnboundedSender<NetworkEvent>,
    interval: Duration,
) {
    let mut cursor = PollCursor::INITIAL;
    log::info!("Poll loop started ({}ms interval)", interval.as_millis());

    loop {
        match poll_once(backend.as_ref(), cursor).await {
            Ok((next, messages)) => {
                log::debug!(
                    "Poll at {} returned {} message(s), cursor now {}",
                    cursor.last_message_id(),
                    messages.len(),
                    next.last_message_id()
                );
                cursor = next;
                if event_sender
                    .send(NetworkEvent::MessagesReceived(messages))
                    .is_err()
                {
                    log::info!("UI is gone; stopping poll loop");
                    return;
                }
            }
            Err(err) => {
                log::error!("Polling for messages failed: {err}");
            }
        }

        tokio::time::sleep(interval).await;
    }
}
