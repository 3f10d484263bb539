//! Variant Selector Component
//!
//! Buttons choosing the todo app's class set.

use leptos::prelude::*;

use crate::store::{store_select_variant, GalleryStateStoreFields, GalleryStore, StyleVariant};

#[component]
pub fn VariantSelector(store: GalleryStore) -> impl IntoView {
    view! {
        <div class="variant-selector">
            {StyleVariant::ALL.iter().map(|variant| {
                let variant = *variant;
                let is_selected = move || store.variant().get() == variant;
                view! {
                    <button
                        class=move || if is_selected() { "variant-btn active" } else { "variant-btn" }
                        on:click=move |_| store_select_variant(&store, variant)
                    >
                        {variant.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
