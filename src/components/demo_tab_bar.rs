//! Demo Tab Bar Component
//!
//! Tab bar for switching between demos in the main content area.

use leptos::prelude::*;

use crate::store::{store_select_demo, Demo, GalleryStateStoreFields, GalleryStore};

#[component]
pub fn DemoTabBar(store: GalleryStore) -> impl IntoView {
    view! {
        <nav class="demo-tab-bar">
            {Demo::ALL.iter().map(|demo| {
                let demo = *demo;
                let is_active = move || store.demo().get() == demo;
                let tab_class = move || {
                    if is_active() { "demo-tab active" } else { "demo-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| store_select_demo(&store, demo)
                    >
                        {demo.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
