//! In-memory doubles for the use case seams.

use super::{FileSaver, HttpReply, Notifier, ObjectUrls, ReportClient};
use async_trait::async_trait;
use contracts::reports::ReportError;
use contracts::shared::notifications::{ToastId, ToastKind, ToastQueue};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

type Gate = oneshot::Sender<Result<HttpReply, ReportError>>;

pub fn reply(status: u16, body: &[u8]) -> HttpReply {
    let status_text = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    HttpReply {
        status,
        status_text: status_text.to_string(),
        body: body.to_vec(),
    }
}

/// Answers requests with pre-scripted outcomes, in order, and records the URLs asked for.
#[derive(Default)]
pub struct FakeClient {
    replies: RefCell<VecDeque<Result<HttpReply, ReportError>>>,
    requested: RefCell<Vec<String>>,
}

impl FakeClient {
    pub fn replying(status: u16, body: &[u8]) -> Self {
        let client = Self::default();
        client.push_reply(status, body);
        client
    }

    pub fn failing(error: ReportError) -> Self {
        let client = Self::default();
        client.replies.borrow_mut().push_back(Err(error));
        client
    }

    pub fn push_reply(&self, status: u16, body: &[u8]) {
        self.replies.borrow_mut().push_back(Ok(reply(status, body)));
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ReportClient for FakeClient {
    async fn get(&self, url: &str) -> Result<HttpReply, ReportError> {
        self.requested.borrow_mut().push(url.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ReportError::Network("connection refused".to_string())))
    }
}

/// Each request waits until the test releases its gate; gates are handed
/// out in request order.
pub struct GatedClient {
    pending: RefCell<VecDeque<oneshot::Receiver<Result<HttpReply, ReportError>>>>,
}

impl GatedClient {
    pub fn new(requests: usize) -> (Self, Vec<Gate>) {
        let (gates, pending) = (0..requests).map(|_| oneshot::channel()).unzip();
        let client = Self {
            pending: RefCell::new(pending),
        };
        (client, gates)
    }
}

#[async_trait(?Send)]
impl ReportClient for GatedClient {
    async fn get(&self, _url: &str) -> Result<HttpReply, ReportError> {
        let Some(gate) = self.pending.borrow_mut().pop_front() else {
            return Err(ReportError::Network("connection refused".to_string()));
        };
        gate.await
            .unwrap_or_else(|_| Err(ReportError::Network("request abandoned".to_string())))
    }
}

/// Lets every other future in a `join!` make progress once
pub async fn yield_once() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            std::task::Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    })
    .await
}

/// Hands out `blob:N` URLs and tracks which ones are still alive.
#[derive(Default)]
pub struct RecordingUrls {
    next: Cell<u32>,
    live: RefCell<Vec<String>>,
    revoked: RefCell<Vec<String>>,
}

impl RecordingUrls {
    pub fn live(&self) -> Vec<String> {
        self.live.borrow().clone()
    }

    pub fn revoked(&self) -> Vec<String> {
        self.revoked.borrow().clone()
    }
}

impl ObjectUrls for RecordingUrls {
    fn create(&self, _bytes: &[u8], _mime_type: &str) -> Result<String, ReportError> {
        self.next.set(self.next.get() + 1);
        let url = format!("blob:{}", self.next.get());
        self.live.borrow_mut().push(url.clone());
        Ok(url)
    }

    fn revoke(&self, url: &str) {
        self.live.borrow_mut().retain(|live| live != url);
        self.revoked.borrow_mut().push(url.to_string());
    }
}

/// Records every save-as together with whether its URL was still alive.
pub struct RecordingSaver<'a> {
    urls: &'a RecordingUrls,
    saves: RefCell<Vec<(String, String, bool)>>,
}

impl<'a> RecordingSaver<'a> {
    pub fn new(urls: &'a RecordingUrls) -> Self {
        Self {
            urls,
            saves: RefCell::new(Vec::new()),
        }
    }

    /// (url, filename, url was live at save time)
    pub fn saves(&self) -> Vec<(String, String, bool)> {
        self.saves.borrow().clone()
    }
}

impl FileSaver for RecordingSaver<'_> {
    fn save(&self, url: &str, filename: &str) -> Result<(), ReportError> {
        let alive = self.urls.live().iter().any(|live| live == url);
        self.saves
            .borrow_mut()
            .push((url.to_string(), filename.to_string(), alive));
        Ok(())
    }
}

impl Notifier for RefCell<ToastQueue> {
    fn show(&self, kind: ToastKind, message: String, replaces: Option<ToastId>) -> ToastId {
        self.borrow_mut().push(kind, message, replaces)
    }
}
