use std::error::Error;
use std::future::Future;

use crate::common::{OutgoingMessage, PollRequest, PollResponse};

pub type BackendError = Box<dyn Error + Send + Sync>;

/// The two server calls the client makes.
///
/// Network failures, error statuses and undecodable bodies all surface as
/// the same `BackendError`; callers never tell them apart.
pub trait ChatBackend: Send + Sync + 'static {
    /// `POST /chat`. The reply body is discarded.
    fn submit(
        &self,
        message: OutgoingMessage,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// `POST /messages`.
    fn fetch_messages(
        &self,
        request: PollRequest,
    ) -> impl Future<Output = Result<PollResponse, BackendError>> + Send;
}
