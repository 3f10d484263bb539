//! Input Mirror Component
//!
//! Reads an input's current value through its `NodeRef`.

use leptos::html;
use leptos::prelude::*;

#[component]
pub fn InputMirror() -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let name_ref = NodeRef::<html::Input>::new();

    let mirrored = move || {
        input_value.track();
        name_ref.get().map(|el| el.value()).unwrap_or_default()
    };

    view! {
        <h1>"Input value: " {mirrored}</h1>
        <label for="name">"Name"</label>
        <input
            id="name"
            type="text"
            node_ref=name_ref
            prop:value=move || input_value.get()
            on:input=move |ev| {
                log::debug!("[REF] input element present: {}", name_ref.get_untracked().is_some());
                set_input_value.set(event_target_value(&ev));
            }
        />
    }
}
