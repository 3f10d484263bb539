//! Hooks Gallery App
//!
//! Shell with a tab bar; each tab mounts one demo.

use leptos::prelude::*;

use crate::components::{
    CounterPanel, DemoTabBar, InputMirror, PokemonBrowser, RenderCount, ThemePanel, TodoApp,
    TracksPanel, VariantSelector,
};
use crate::config::AppConfig;
use crate::store::{new_gallery_store, Demo, GalleryStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = new_gallery_store();
    let variant = Signal::derive(move || store.variant().get());

    view! {
        <div class="app-layout">
            <DemoTabBar store=store />

            <main class="main-content">
                {move || match store.demo().get() {
                    Demo::Todo => view! {
                        <VariantSelector store=store />
                        <TodoApp variant=variant />
                    }.into_any(),
                    Demo::Pokemon => view! { <PokemonBrowser config=config.clone() /> }.into_any(),
                    Demo::Tracks => view! { <TracksPanel config=config.clone() /> }.into_any(),
                    Demo::Counter => view! { <CounterPanel /> }.into_any(),
                    Demo::Theme => view! { <ThemePanel /> }.into_any(),
                    Demo::RenderCount => view! { <RenderCount /> }.into_any(),
                    Demo::InputMirror => view! { <InputMirror /> }.into_any(),
                }}
            </main>
        </div>
    }
}
