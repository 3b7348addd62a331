//! Seams between the report use cases and the browser.
//!
//! Use cases only talk to these traits, so they run against the real
//! browser implementations in the app and against in-memory doubles in tests.

use async_trait::async_trait;
use contracts::reports::{DashboardState, ReportError};
use contracts::shared::notifications::{ToastId, ToastKind};
use leptos::prelude::*;
use std::cell::RefCell;

#[cfg(test)]
pub mod test_support;

/// HTTP reply before any classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Checks status and body and hands back the payload.
    ///
    /// Non-2xx statuses map to their error kind; a zero-length body is an
    /// error even on 200.
    pub fn into_payload(self) -> Result<Vec<u8>, ReportError> {
        if !self.is_success() {
            return Err(ReportError::from_status(self.status, &self.status_text));
        }
        if self.body.is_empty() {
            return Err(ReportError::EmptyPayload);
        }
        Ok(self.body)
    }
}

/// Issues GET requests against the report backend
#[async_trait(?Send)]
pub trait ReportClient {
    /// Transport failures come back as `Err`; any HTTP status is an `Ok` reply.
    async fn get(&self, url: &str) -> Result<HttpReply, ReportError>;
}

/// Creates and releases locally addressable URLs for binary payloads
pub trait ObjectUrls {
    fn create(&self, bytes: &[u8], mime_type: &str) -> Result<String, ReportError>;
    fn revoke(&self, url: &str);
}

/// Object URL released when the guard goes out of scope.
pub struct ScopedObjectUrl<'a, U: ObjectUrls + ?Sized> {
    urls: &'a U,
    url: String,
}

impl<'a, U: ObjectUrls + ?Sized> ScopedObjectUrl<'a, U> {
    pub fn new(urls: &'a U, bytes: &[u8], mime_type: &str) -> Result<Self, ReportError> {
        let url = urls.create(bytes, mime_type)?;
        Ok(Self { urls, url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl<U: ObjectUrls + ?Sized> Drop for ScopedObjectUrl<'_, U> {
    fn drop(&mut self) {
        self.urls.revoke(&self.url);
    }
}

/// Triggers a save-as for an object URL
pub trait FileSaver {
    fn save(&self, url: &str, filename: &str) -> Result<(), ReportError>;
}

/// Surfaces lifecycle events to the user
pub trait Notifier {
    /// Shows a toast, rewriting `replaces` in place when it is still visible
    fn show(&self, kind: ToastKind, message: String, replaces: Option<ToastId>) -> ToastId;

    fn loading(&self, message: &str) -> ToastId {
        self.show(ToastKind::Loading, message.to_string(), None)
    }

    fn success(&self, message: &str, replaces: Option<ToastId>) -> ToastId {
        self.show(ToastKind::Success, message.to_string(), replaces)
    }

    fn error(&self, message: &str, replaces: Option<ToastId>) -> ToastId {
        self.show(ToastKind::Error, message.to_string(), replaces)
    }
}

/// Access to the dashboard state, wherever it is kept
pub trait DashboardStore {
    fn mutate(&self, f: impl FnOnce(&mut DashboardState));
    fn inspect<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T;
}

impl DashboardStore for RwSignal<DashboardState> {
    fn mutate(&self, f: impl FnOnce(&mut DashboardState)) {
        Update::update(self, f);
    }

    fn inspect<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T {
        self.with_untracked(f)
    }
}

impl DashboardStore for RefCell<DashboardState> {
    fn mutate(&self, f: impl FnOnce(&mut DashboardState)) {
        f(&mut self.borrow_mut());
    }

    fn inspect<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T {
        f(&self.borrow())
    }
}

/// Marks a report as loading for as long as the guard lives.
pub struct LoadingGuard<'a, S: DashboardStore> {
    store: &'a S,
    report_id: &'a str,
}

impl<'a, S: DashboardStore> LoadingGuard<'a, S> {
    pub fn begin(store: &'a S, report_id: &'a str) -> Self {
        store.mutate(|state| {
            state.loading.insert(report_id.to_string());
        });
        Self { store, report_id }
    }
}

impl<S: DashboardStore> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        let report_id = self.report_id;
        self.store.mutate(|state| {
            state.loading.remove(report_id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingUrls;
    use super::*;

    fn reply(status: u16, body: &[u8]) -> HttpReply {
        HttpReply {
            status,
            status_text: "Status".to_string(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_into_payload() {
        assert_eq!(reply(200, b"data").into_payload(), Ok(b"data".to_vec()));
        assert_eq!(reply(200, b"").into_payload(), Err(ReportError::EmptyPayload));
        assert_eq!(reply(404, b"").into_payload(), Err(ReportError::NotFound));
        assert_eq!(reply(500, b"oops").into_payload(), Err(ReportError::ServerError));
        assert_eq!(
            reply(418, b"").into_payload(),
            Err(ReportError::Http {
                status: 418,
                status_text: "Status".to_string()
            })
        );
    }

    #[test]
    fn test_scoped_url_is_revoked_on_drop() {
        let urls = RecordingUrls::default();
        {
            let scoped = ScopedObjectUrl::new(&urls, b"data", "application/pdf").unwrap();
            assert_eq!(urls.live().len(), 1);
            assert!(scoped.as_str().starts_with("blob:"));
        }
        assert!(urls.live().is_empty());
        assert_eq!(urls.revoked().len(), 1);
    }

    #[test]
    fn test_loading_guard_clears_flag() {
        let store = RefCell::new(DashboardState::default());
        {
            let _guard = LoadingGuard::begin(&store, "global");
            assert!(store.inspect(|s| s.is_loading("global")));
        }
        assert!(!store.inspect(|s| s.is_loading("global")));
    }
}
