//! Render Count Component
//!
//! Counts how often the input's effect ran. The counter lives in a
//! `StoredValue`, so bumping it does not itself trigger anything; the
//! heading shows a snapshot taken just before each bump.

use leptos::prelude::*;

#[component]
pub fn RenderCount() -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let shown = track_renders(input_value.into());

    view! {
        <input
            type="text"
            prop:value=move || input_value.get()
            on:input=move |ev| set_input_value.set(event_target_value(&ev))
        />
        <h1>"Render Count: " {move || shown.get()}</h1>
    }
}

/// Bumps a stored counter each time `source` changes and returns the
/// count as it stood before the latest bump.
fn track_renders(source: Signal<String>) -> ReadSignal<u32> {
    let count = StoredValue::new(0u32);
    let (shown, set_shown) = signal(0u32);

    Effect::new(move |_| {
        source.track();
        set_shown.set(count.get_value());
        count.update_value(|n| *n += 1);
    });

    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::LocalSet;

    async fn drain_tasks() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_shows_previous_count() {
        let _ = any_spawner::Executor::init_tokio();
        LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                let (input, shown) = owner.with(|| {
                    let input = RwSignal::new(String::new());
                    (input, track_renders(input.into()))
                });

                drain_tasks().await;
                assert_eq!(shown.get_untracked(), 0);

                input.set("a".into());
                drain_tasks().await;
                assert_eq!(shown.get_untracked(), 1);

                input.set("ab".into());
                drain_tasks().await;
                assert_eq!(shown.get_untracked(), 2);

                owner.cleanup();
            })
            .await;
    }
}
