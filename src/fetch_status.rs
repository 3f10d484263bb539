//! Fetch Status Machine
//!
//! `Idle -> Loading -> (Success | Error)` for a single outbound request,
//! plus the ticket bookkeeping that keeps late completions from landing on
//! a newer request or a torn-down view.

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Success => "success",
            FetchStatus::Error => "error",
        }
    }

    /// `Success` and `Error` hold until a new request starts
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchStatus::Success | FetchStatus::Error)
    }
}

/// Status plus payload. `data` is only present on `Success`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    status: FetchStatus,
    data: Option<T>,
}

/// Inputs to the status machine
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<T> {
    Started,
    Resolved(T),
    Failed,
}

impl<T> RequestState<T> {
    pub fn idle() -> Self {
        Self { status: FetchStatus::Idle, data: None }
    }

    pub fn loading() -> Self {
        Self { status: FetchStatus::Loading, data: None }
    }

    pub fn success(data: T) -> Self {
        Self { status: FetchStatus::Success, data: Some(data) }
    }

    pub fn error() -> Self {
        Self { status: FetchStatus::Error, data: None }
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Pure transition. Completions that arrive outside `Loading` are ignored.
    pub fn apply(self, event: FetchEvent<T>) -> Self {
        match event {
            FetchEvent::Started => Self::loading(),
            FetchEvent::Resolved(data) if self.status == FetchStatus::Loading => Self::success(data),
            FetchEvent::Failed if self.status == FetchStatus::Loading => Self::error(),
            _ => self,
        }
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Handle for one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Non-reactive state behind one `use_fetch` instance.
#[derive(Debug)]
pub struct FetchStore<T> {
    state: RequestState<T>,
    generation: u64,
    in_flight: Option<u64>,
    last_url: Option<String>,
}

impl<T> FetchStore<T> {
    pub fn new() -> Self {
        Self {
            state: RequestState::idle(),
            generation: 0,
            in_flight: None,
            last_url: None,
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    /// Begin a request for `url` unless that url was already started.
    pub fn start(&mut self, url: &str) -> Option<RequestTicket> {
        if self.last_url.as_deref() == Some(url) {
            return None;
        }
        Some(self.begin(url))
    }

    fn begin(&mut self, url: &str) -> RequestTicket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.last_url = Some(url.to_string());
        let previous = std::mem::take(&mut self.state);
        self.state = previous.apply(FetchEvent::Started);
        RequestTicket(self.generation)
    }

    /// Apply a completion. Returns false for a stale ticket.
    pub fn settle(&mut self, ticket: RequestTicket, result: Result<T, FetchError>) -> bool {
        if self.in_flight != Some(ticket.0) {
            return false;
        }
        self.in_flight = None;
        let event = match result {
            Ok(data) => FetchEvent::Resolved(data),
            Err(_) => FetchEvent::Failed,
        };
        let previous = std::mem::take(&mut self.state);
        self.state = previous.apply(event);
        true
    }

    /// Owner went away; whatever is in flight must not land.
    pub fn teardown(&mut self) {
        self.in_flight = None;
    }
}

impl<T> Default for FetchStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const URL: &str = "https://api.example/items";

    #[test]
    fn test_start_moves_to_loading() {
        let mut store = FetchStore::<Value>::new();
        assert_eq!(store.state().status(), FetchStatus::Idle);

        let ticket = store.start(URL);
        assert!(ticket.is_some());
        assert_eq!(store.state().status(), FetchStatus::Loading);
        assert!(store.state().data().is_none());
    }

    #[test]
    fn test_success_carries_payload() {
        let mut store = FetchStore::new();
        let ticket = store.start(URL).unwrap();

        assert!(store.settle(ticket, Ok(json!([{"id": 1}]))));
        assert_eq!(store.state(), &RequestState::success(json!([{"id": 1}])));
    }

    #[test]
    fn test_failure_drops_payload() {
        let mut store = FetchStore::<Value>::new();
        let ticket = store.start(URL).unwrap();

        assert!(store.settle(ticket, Err(FetchError::Network("offline".into()))));
        assert_eq!(store.state().status(), FetchStatus::Error);
        assert!(store.state().data().is_none());
    }

    #[test]
    fn test_settles_exactly_once() {
        let mut store = FetchStore::new();
        let ticket = store.start(URL).unwrap();

        assert!(store.settle(ticket, Ok(json!(1))));
        assert!(!store.settle(ticket, Err(FetchError::Parse("late".into()))));
        assert_eq!(store.state().status(), FetchStatus::Success);
    }

    #[test]
    fn test_same_url_is_not_restarted() {
        let mut store = FetchStore::<Value>::new();
        assert!(store.start(URL).is_some());
        assert!(store.start(URL).is_none());
        assert!(store.start("https://api.example/other").is_some());
    }

    #[test]
    fn test_new_request_clears_stale_data() {
        let mut store = FetchStore::new();
        let first = store.start(URL).unwrap();
        store.settle(first, Ok(json!({"page": 1})));

        let second = store.start("https://api.example/items?page=2").unwrap();
        assert_eq!(store.state(), &RequestState::loading());

        // Completion of the superseded request is ignored
        assert!(!store.settle(first, Ok(json!({"page": 0}))));
        assert!(store.settle(second, Ok(json!({"page": 2}))));
        assert_eq!(store.state().data(), Some(&json!({"page": 2})));
    }

    #[test]
    fn test_teardown_discards_completion() {
        let mut store = FetchStore::<Value>::new();
        let ticket = store.start(URL).unwrap();
        store.teardown();

        assert!(!store.settle(ticket, Ok(json!(1))));
        assert_eq!(store.state().status(), FetchStatus::Loading);
    }

    #[test]
    fn test_completion_outside_loading_is_ignored() {
        let idle = RequestState::<u32>::idle();
        assert_eq!(idle.clone().apply(FetchEvent::Resolved(7)), idle);

        let done = RequestState::success(3u32);
        assert_eq!(done.clone().apply(FetchEvent::Failed), done);
        assert!(done.status().is_settled());
    }
}
