//! Reactive Hooks
//!
//! Glue between the pure modules and Leptos signals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::fetch_status::{FetchStore, RequestState};
use crate::http::{fetch_json, Fetcher};
use crate::models::Photo;
use crate::reducer::Reducer;

/// Fetch `url` once per distinct value and expose `{status, data}`.
///
/// A completion that arrives after the owning view was disposed, or after a
/// newer url was started, is dropped.
pub fn use_fetch<T, F>(url: Signal<String>, fetcher: F) -> Signal<RequestState<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fetcher + Clone + 'static,
{
    let store = StoredValue::new(FetchStore::<T>::new());
    let state = RwSignal::new(RequestState::<T>::idle());

    on_cleanup(move || {
        store.try_update_value(|s| s.teardown());
    });

    Effect::new(move |_| {
        let url = url.get();
        let Some(ticket) = store.try_update_value(|s| s.start(&url)).flatten() else {
            return;
        };
        state.set(RequestState::loading());
        log::debug!("[FETCH] GET {}", url);

        let fetcher = fetcher.clone();
        spawn_local(async move {
            let result = fetch_json::<T, _>(&fetcher, &url).await;
            match &result {
                Ok(_) => log::debug!("[FETCH] {} done", url),
                Err(e) => log::warn!("[FETCH] {} failed: {}", url, e),
            }

            let applied = store.try_update_value(|s| s.settle(ticket, result)).unwrap_or(false);
            if !applied {
                log::debug!("[FETCH] dropped stale completion for {}", url);
                return;
            }
            if let Some(next) = store.try_with_value(|s| s.state().clone()) {
                let _ = state.try_set(next);
            }
        });
    });

    state.into()
}

/// `(state, dispatch)` over a pure reducer.
pub fn use_reducer<S>(initial: S) -> (Signal<S>, Callback<S::Action>)
where
    S: Reducer + Clone + Send + Sync + 'static,
    S::Action: 'static,
{
    let state = RwSignal::new(initial);
    let dispatch = Callback::new(move |action: S::Action| {
        state.update(|s| *s = s.clone().reduce(action));
    });
    (state.into(), dispatch)
}

/// Photo "tracks" from the configured endpoint, logged on every change.
pub fn use_tracks<F>(config: &AppConfig, fetcher: F) -> Signal<RequestState<Vec<Photo>>>
where
    F: Fetcher + Clone + 'static,
{
    let url = config.tracks_endpoint.clone();
    let tracks = use_fetch::<Vec<Photo>, _>(Signal::derive(move || url.clone()), fetcher);

    Effect::new(move |_| {
        tracks.with(|t| {
            log::info!(
                "[TRACKS] status={} data={}",
                t.status().as_str(),
                t.data().map(|d| d.len().to_string()).unwrap_or_else(|| "null".into())
            );
            if let Some(data) = t.data() {
                if let Ok(value) = serde_wasm_bindgen::to_value(data) {
                    web_sys::console::dir_1(&value);
                }
            }
        });
    });

    tracks
}
