use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::{NetworkCommand, NetworkEvent};

use super::components::{chat_area, input_bar};
use super::state::AppState;

/// Events arrive off-frame, so the UI re-checks the channel on this cadence.
const EVENT_CHECK_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<NetworkCommand>,
    event_receiver: mpsc::UnboundedReceiver<NetworkEvent>,
    scroll_animation: Duration,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<NetworkCommand>,
        event_receiver: mpsc::UnboundedReceiver<NetworkEvent>,
        scroll_animation: Duration,
    ) -> Self {
        Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
            scroll_animation,
        }
    }

    fn handle_network_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                NetworkEvent::MessagesReceived(batch) => self.state.push_batch(batch),
            }
        }
    }

    fn send_command(&mut self, text: String) {
        relay_submission(&self.command_sender, text);
    }
}

/// Hands a submission to the network task without blocking the frame.
/// The field is already cleared, so a refused submission is logged with its
/// text and lost.
fn relay_submission(sender: &mpsc::Sender<NetworkCommand>, text: String) -> bool {
    match sender.try_send(NetworkCommand::SendMessage(text)) {
        Ok(()) => true,
        Err(err) => {
            let reason = err.to_string();
            let NetworkCommand::SendMessage(text) = err.into_inner();
            log::warn!("Dropped chat submission {text:?}: {reason}");
            false
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_network_events();

        egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(text) =
                input_bar::render(ui, &mut self.state.input_text, &mut self.state.focus_input)
            {
                self.send_command(text);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let scroll = self.state.take_scroll_request();
            chat_area::render(ui, &self.state.transcript, scroll, self.scroll_animation);
        });

        ctx.request_repaint_after(EVENT_CHECK_INTERVAL);
    }
}
