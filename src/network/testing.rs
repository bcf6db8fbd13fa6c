//! Scripted in-memory backend for exercising the network task without a server.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::time::Instant;

use crate::common::{IncomingMessage, OutgoingMessage, PollCursor, PollRequest, PollResponse};

use super::backend::{BackendError, ChatBackend};

pub enum Scripted {
    Reply(PollResponse),
    Fail(&'static str),
}

#[derive(Default)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Scripted>>,
    polls: Mutex<Vec<(PollCursor, Instant)>>,
    submissions: Mutex<Vec<String>>,
    fail_submissions: bool,
}

impl ScriptedBackend {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn failing_submissions() -> Self {
        Self {
            fail_submissions: true,
            ..Self::default()
        }
    }

    pub fn polls(&self) -> Vec<(PollCursor, Instant)> {
        self.polls.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<String> {
        self.submissions.lock().unwrap().clone()
    }
}

pub fn reply(last_message_id: i64, messages: &[(&str, &str)]) -> Scripted {
    Scripted::Reply(PollResponse {
        last_message_id: PollCursor::new(last_message_id),
        messages: messages
            .iter()
            .map(|(sender, text)| IncomingMessage::new(*sender, *text))
            .collect(),
    })
}

impl ChatBackend for ScriptedBackend {
    async fn submit(&self, message: OutgoingMessage) -> Result<(), BackendError> {
        self.submissions.lock().unwrap().push(message.text);
        if self.fail_submissions {
            return Err("connection refused".into());
        }
        Ok(())
    }

    async fn fetch_messages(&self, request: PollRequest) -> Result<PollResponse, BackendError> {
        self.polls
            .lock()
            .unwrap()
            .push((request.last_message_id, Instant::now()));

        // Once the script runs out the server has nothing new.
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(response)) => Ok(response),
            Some(Scripted::Fail(reason)) => Err(reason.into()),
            None => Ok(PollResponse {
                last_message_id: request.last_message_id,
                messages: Vec::new(),
            }),
        }
    }
}
