use std::time::Duration;

use crate::common::IncomingMessage;

/// Renders the transcript, one line per message. With `scroll_to_bottom` set
/// the view glides to the last line over `animation`.
pub fn render(
    ui: &mut egui::Ui,
    transcript: &[IncomingMessage],
    scroll_to_bottom: bool,
    animation: Duration,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for message in transcript {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("{}:", message.sender())).strong());
                    ui.label(message.text());
                });
            }

            if scroll_to_bottom {
                ui.scroll_to_cursor_animation(
                    Some(egui::Align::BOTTOM),
                    egui::style::ScrollAnimation::duration(animation.as_secs_f32()),
                );
            }
        });
}
