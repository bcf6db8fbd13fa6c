use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::{NetworkCommand, NetworkEvent, OutgoingMessage};

use super::backend::ChatBackend;
use super::poller;

pub struct ChatClient<B> {
    backend: Arc<B>,
    event_sender: mpsc::UnboundedSender<NetworkEvent>,
    command_receiver: mpsc::Receiver<NetworkCommand>,
    poll_interval: Duration,
}

impl<B: ChatBackend> ChatClient<B> {
    pub fn new(
        backend: B,
        event_sender: mpsc::UnboundedSender<NetworkEvent>,
        command_receiver: mpsc::Receiver<NetworkCommand>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            backend: Arc::new(backend),
            event_sender,
            command_receiver,
            poll_interval,
        }
    }

    /// Starts the poll loop and relays UI commands until the UI hangs up.
    pub async fn run(mut self) {
        let poll_loop = tokio::spawn(poller::run(
            self.backend.clone(),
            self.event_sender.clone(),
            self.poll_interval,
        ));
        log::info!("Network task started");

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command);
        }

        log::info!("Command channel closed; shutting down network task");
        poll_loop.abort();
    }

    fn handle_command(&self, command: NetworkCommand) {
        match command {
            NetworkCommand::SendMessage(text) => {
                // Fire and forget: nobody waits on the reply.
                let backend = self.backend.clone();
                tokio::spawn(async move {
                    if let Err(err) = backend.submit(OutgoingMessage { text }).await {
                        log::debug!("Dropped chat submission: {err}");
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::testing::{ScriptedBackend, reply};

    const INTERVAL: Duration = Duration::from_millis(1000);

    fn spawn_client(
        backend: ScriptedBackend,
    ) -> (
        Arc<ScriptedBackend>,
        mpsc::Sender<NetworkCommand>,
        mpsc::UnboundedReceiver<NetworkEvent>,
        tokio::task::JoinHandle<()>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let client = ChatClient::new(backend, event_tx, cmd_rx, INTERVAL);
        let backend = client.backend.clone();
        let handle = tokio::spawn(client.run());
        (backend, cmd_tx, event_rx, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn each_command_is_submitted_once_and_verbatim() {
        let (backend, cmd_tx, _events, handle) = spawn_client(ScriptedBackend::default());

        cmd_tx
            .send(NetworkCommand::SendMessage("hello".to_string()))
            .await
            .unwrap();
        cmd_tx
            .send(NetworkCommand::SendMessage(String::new()))
            .await
            .unwrap();
        cmd_tx
            .send(NetworkCommand::SendMessage("  padded  ".to_string()))
            .await
            .unwrap();
        drop(cmd_tx);
        handle.await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(
            backend.submissions(),
            vec!["hello".to_string(), String::new(), "  padded  ".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failed_submission_does_not_stop_the_client() {
        let (backend, cmd_tx, mut events, handle) =
            spawn_client(ScriptedBackend::failing_submissions());

        cmd_tx
            .send(NetworkCommand::SendMessage("lost".to_string()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!handle.is_finished());

        cmd_tx
            .send(NetworkCommand::SendMessage("also lost".to_string()))
            .await
            .unwrap();
        assert!(matches!(
            events.recv().await,
            Some(NetworkEvent::MessagesReceived(_))
        ));
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(backend.submissions().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_loop_starts_immediately() {
        let (backend, _cmd_tx, mut events, _handle) =
            spawn_client(ScriptedBackend::new([reply(3, &[("alice", "hi"), ("bob", "hey")])]));

        match events.recv().await {
            Some(NetworkEvent::MessagesReceived(messages)) => assert_eq!(messages.len(), 2),
            None => panic!("client stopped"),
        }
        assert_eq!(backend.polls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn closing_commands_stops_polling() {
        let (backend, cmd_tx, _events, handle) = spawn_client(ScriptedBackend::default());
        tokio::time::sleep(Duration::from_millis(10)).await;

        drop(cmd_tx);
        handle.await.unwrap();
        let polls_at_shutdown = backend.polls().len();
        tokio::time::sleep(INTERVAL * 5).await;

        assert_eq!(backend.polls().len(), polls_at_shutdown);
    }
}
