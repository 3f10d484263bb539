//! Pokémon Browser Component
//!
//! Fetches the listing through `use_fetch`, then every detail url in turn.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::hooks::use_fetch;
use crate::http::{load_pokemon_details, BrowserFetcher};
use crate::list::{ItemCollection, ListItem};
use crate::models::{Pokemon, PokemonPage};

#[component]
pub fn PokemonBrowser(config: AppConfig) -> impl IntoView {
    let endpoint = config.pokemon_endpoint.clone();
    let page = use_fetch::<PokemonPage, _>(Signal::derive(move || endpoint.clone()), BrowserFetcher);
    let pokemons = RwSignal::new(ItemCollection::<Pokemon>::new());

    // Load details whenever a new listing lands
    Effect::new(move |_| {
        let Some(listing) = page.with(|p| p.data().cloned()) else { return };
        spawn_local(async move {
            let loaded = match load_pokemon_details(&BrowserFetcher, &listing).await {
                Ok(loaded) => loaded,
                Err(e) => {
                    log::warn!("[POKEMON] detail fetch failed: {}", e);
                    Vec::new()
                }
            };
            log::info!("[POKEMON] loaded {} pokemon", loaded.len());
            let _ = pokemons.try_set(ItemCollection::from_values(loaded));
        });
    });

    let is_loading = move || {
        page.with(|p| p.data().is_none() || p.is_loading())
            || pokemons.with(|list| list.is_empty())
    };

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! { <span class="loading"></span> }
        >
            <div class="pokemon-grid">
                <For
                    each=move || pokemons.with(|list| list.render())
                    key={|entry: &ListItem<Pokemon>| entry.id}
                    children={|entry: ListItem<Pokemon>| view! { <PokemonCard pokemon=entry.value /> }}
                />
            </div>
        </Show>
    }
}

/// One card; clicking the image hides it
#[component]
pub fn PokemonCard(pokemon: Pokemon) -> impl IntoView {
    let (show, set_show) = signal(true);
    let name = pokemon.name.clone();
    let artwork = pokemon.artwork().unwrap_or_default().to_string();

    track_card_updates(name.clone(), show);
    let cleanup_name = name.clone();
    on_cleanup(move || log::debug!("[POKEMON] {} unmounted", cleanup_name));

    view! {
        <Show when=move || show.get()>
            <div class="pokemon-card">
                <img
                    src=artwork.clone()
                    alt=name.clone()
                    on:click=move |_| set_show.update(|s| *s = !*s)
                />
                <p>{name.clone()}</p>
            </div>
        </Show>
    }
}

/// Logs at mount and on every visibility toggle. Returns the number of
/// updates seen after mount.
fn track_card_updates(name: String, show: ReadSignal<bool>) -> StoredValue<u32> {
    let updates = StoredValue::new(0u32);
    Effect::new(move |prev: Option<()>| {
        let visible = show.get();
        if prev.is_none() {
            log::debug!("[POKEMON] {} mounted", name);
        } else {
            updates.update_value(|n| *n += 1);
            log::debug!("[POKEMON] {} updated, visible={}", name, visible);
        }
    });
    updates
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
    async fn test_card_logs_each_toggle() {
        let _ = any_spawner::Executor::init_tokio();
        LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                let (set_show, updates) = owner.with(|| {
                    let (show, set_show) = signal(true);
                    (set_show, track_card_updates("pikachu".into(), show))
                });

                drain_tasks().await;
                assert_eq!(updates.get_value(), 0);

                set_show.set(false);
                drain_tasks().await;
                set_show.set(true);
                drain_tasks().await;
                assert_eq!(updates.get_value(), 2);

                owner.cleanup();
            })
            .await;
    }
}
