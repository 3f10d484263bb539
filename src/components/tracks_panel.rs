//! Tracks Panel Component
//!
//! Renders the `use_tracks` custom hook.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::fetch_status::FetchStatus;
use crate::hooks::use_tracks;
use crate::http::BrowserFetcher;

#[component]
pub fn TracksPanel(config: AppConfig) -> impl IntoView {
    let tracks = use_tracks(&config, BrowserFetcher);

    view! {
        <section class="tracks">
            <h1>"Hello"</h1>
            <p class="tracks-status">{move || tracks.with(|t| t.status().as_str())}</p>
            {move || match tracks.with(|t| t.status()) {
                FetchStatus::Loading => view! { <span class="loading"></span> }.into_any(),
                FetchStatus::Success => view! {
                    <ul class="track-list">
                        {tracks.with(|t| t.data().cloned().unwrap_or_default())
                            .into_iter()
                            .map(|photo| view! {
                                <li>
                                    <img src=photo.thumbnail_url alt=photo.title.clone() />
                                    <span>{photo.title}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }.into_any(),
                FetchStatus::Idle | FetchStatus::Error => ().into_any(),
            }}
        </section>
    }
}
