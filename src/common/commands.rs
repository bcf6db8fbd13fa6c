/// Commands the UI sends down to the network task.
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Submit the text field's content to `/chat`, as typed.
    SendMessage(String),
}
