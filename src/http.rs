//! HTTP
//!
//! One plain GET per call: no headers, no body, no timeout, no retry.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::models::{Pokemon, PokemonPage};

/// Source of response bodies.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetcher;

impl Fetcher for BrowserFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        response.text().await.map_err(|e| FetchError::Network(e.to_string()))
    }
}

/// GET `url` and decode the body as `T`.
///
/// Status codes are not inspected: a JSON error body still decodes.
pub async fn fetch_json<T, F>(fetcher: &F, url: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fetcher,
{
    let body = fetcher.get_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Fetch each listed pokemon in order, one request at a time.
pub async fn load_pokemon_details<F: Fetcher>(
    fetcher: &F,
    page: &PokemonPage,
) -> Result<Vec<Pokemon>, FetchError> {
    let mut pokemons = Vec::with_capacity(page.results.len());
    for entry in &page.results {
        let pokemon = fetch_json::<Pokemon, _>(fetcher, &entry.url).await?;
        pokemons.push(pokemon);
    }
    Ok(pokemons)
}


#[cfg(test)]
mod tests {
    use super::testing::StubFetcher;
    use super::*;
    use crate::fetch_status::{FetchStatus, FetchStore, RequestState};
    use serde_json::{json, Value};

    const LIST_URL: &str = "https://pokeapi.co/api/v2/pokemon";

    fn page_json() -> String {
        json!({
            "count": 2,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        })
        .to_string()
    }

    fn pokemon_json(name: &str) -> String {
        json!({ "name": name, "sprites": { "front_default": format!("{name}.png") } }).to_string()
    }

    #[tokio::test]
    async fn test_fetch_json_success() {
        let fetcher = StubFetcher::default().with("https://api.example/items", r#"[{"id":1}]"#);
        let data: Value = fetch_json(&fetcher, "https://api.example/items").await.unwrap();
        assert_eq!(data, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_fetch_json_non_json_body() {
        let fetcher = StubFetcher::default().with("https://api.example/items", "Not Found");
        let err = fetch_json::<Value, _>(&fetcher, "https://api.example/items").await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_json_network_failure() {
        let fetcher = StubFetcher::default().failing("https://api.example/items");
        let err = fetch_json::<Value, _>(&fetcher, "https://api.example/items").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_store_with_resolved_mock() {
        let url = "https://api.example/items";
        let fetcher = StubFetcher::default().with(url, r#"[{"id":1}]"#);
        let mut store = FetchStore::<Value>::new();

        let ticket = store.start(url).unwrap();
        assert_eq!(store.state().status(), FetchStatus::Loading);

        let result = fetch_json(&fetcher, url).await;
        store.settle(ticket, result);
        assert_eq!(store.state(), &RequestState::success(json!([{"id": 1}])));
    }

    #[tokio::test]
    async fn test_store_with_rejected_mock() {
        let url = "https://api.example/items";
        let fetcher = StubFetcher::default().failing(url);
        let mut store = FetchStore::<Value>::new();

        let ticket = store.start(url).unwrap();
        let result = fetch_json(&fetcher, url).await;
        store.settle(ticket, result);
        assert_eq!(store.state(), &RequestState::error());
    }

    #[tokio::test]
    async fn test_load_details_in_order() {
        let fetcher = StubFetcher::default()
            .with(LIST_URL, &page_json())
            .with("https://pokeapi.co/api/v2/pokemon/1/", &pokemon_json("bulbasaur"))
            .with("https://pokeapi.co/api/v2/pokemon/2/", &pokemon_json("ivysaur"));

        let page: PokemonPage = fetch_json(&fetcher, LIST_URL).await.unwrap();
        let pokemons = load_pokemon_details(&fetcher, &page).await.unwrap();

        let names: Vec<_> = pokemons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
        assert_eq!(pokemons[1].artwork(), Some("ivysaur.png"));
        assert_eq!(fetcher.requested.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_load_details_stops_on_failure() {
        let fetcher = StubFetcher::default()
            .failing("https://pokeapi.co/api/v2/pokemon/1/")
            .with("https://pokeapi.co/api/v2/pokemon/2/", &pokemon_json("ivysaur"));
        let page: PokemonPage = serde_json::from_str(&page_json()).unwrap();

        assert!(load_pokemon_details(&fetcher, &page).await.is_err());
        assert_eq!(fetcher.requested.borrow().len(), 1);
    }
}
