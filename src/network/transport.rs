use reqwest::{Client, Url};

use crate::common::{OutgoingMessage, PollRequest, PollResponse};

use super::backend::{BackendError, ChatBackend};

const CHAT_PATH: &str = "/chat";
const MESSAGES_PATH: &str = "/messages";

/// `ChatBackend` over HTTP. Paths are absolute, so any path on the
/// configured server URL is dropped and only its origin is used.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    chat_url: Url,
    messages_url: Url,
}

impl HttpTransport {
    pub fn new(server_url: &str) -> Result<Self, BackendError> {
        let base = Url::parse(server_url)?;
        if base.cannot_be_a_base() {
            return Err(format!("`{server_url}` cannot be used as a base URL").into());
        }

        Ok(Self {
            http: Client::new(),
            chat_url: base.join(CHAT_PATH)?,
            messages_url: base.join(MESSAGES_PATH)?,
        })
    }

    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }
}

impl ChatBackend for HttpTransport {
    async fn submit(&self, message: OutgoingMessage) -> Result<(), BackendError> {
        self.http
            .post(self.chat_url.clone())
            .json(&message)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn fetch_messages(&self, request: PollRequest) -> Result<PollResponse, BackendError> {
        let response = self
            .http
            .post(self.messages_url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<PollResponse>()
            .await?;
        Ok(response)
    }
}
