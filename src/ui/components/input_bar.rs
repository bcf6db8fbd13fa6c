/// Key that submits the text field.
pub const TRIGGER_KEY: egui::Key = egui::Key::Enter;

/// Empties the field and hands back its text when `key` is the trigger key.
/// The text goes out exactly as typed, empty or not.
pub fn take_on_key(key: egui::Key, input_text: &mut String) -> Option<String> {
    if key != TRIGGER_KEY {
        return None;
    }
    Some(std::mem::take(input_text))
}

pub fn render(ui: &mut egui::Ui, input_text: &mut String, focus: &mut bool) -> Option<String> {
    let response = ui.add(
        egui::TextEdit::singleline(input_text)
            .hint_text("Type a message and press Enter")
            .desired_width(f32::INFINITY),
    );

    if std::mem::take(focus) {
        response.request_focus();
    }

    // A single-line edit gives up focus on Enter; take it straight back so
    // the key does nothing but submit.
    if response.lost_focus() && ui.input(|i| i.key_pressed(TRIGGER_KEY)) {
        response.request_focus();
        return take_on_key(TRIGGER_KEY, input_text);
    }

    None
}
