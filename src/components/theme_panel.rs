//! Theme Panel Component
//!
//! Owns the theme signal and hands it, with a toggle callback, to its child.

use leptos::prelude::*;

use crate::theme::Theme;

#[component]
pub fn ThemePanel() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::Light);
    let toggle = Callback::new(move |_: ()| {
        set_theme.update(|t| *t = t.toggled());
        log::debug!("[THEME] now {}", theme.get_untracked().as_str());
    });

    view! { <ThemedButton theme=theme on_toggle=toggle /> }
}

#[component]
pub fn ThemedButton(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="themed-button"
            style=move || theme.get().palette().to_style()
            on:click=move |_| on_toggle.run(())
        >
            "I am styled by theme!"
        </button>
    }
}
