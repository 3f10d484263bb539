//! Counter Panel Component
//!
//! `use_reducer` over `Counter`.

use leptos::prelude::*;

use crate::hooks::use_reducer;
use crate::reducer::{Counter, CounterAction};

#[component]
pub fn CounterPanel() -> impl IntoView {
    let (state, dispatch) = use_reducer(Counter::default());

    view! {
        <div class="counter">
            "Count: " {move || state.with(|s| s.count)}
            <button on:click=move |_| dispatch.run(CounterAction::Decrement)>"-"</button>
            <button on:click=move |_| dispatch.run(CounterAction::Increment)>"+"</button>
        </div>
    }
}
