//! Gallery State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The store is
//! passed to components as a prop.

use leptos::prelude::*;
use reactive_stores::Store;

/// Which demo the shell is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Demo {
    #[default]
    Todo,
    Pokemon,
    Tracks,
    Counter,
    Theme,
    RenderCount,
    InputMirror,
}

impl Demo {
    pub const ALL: [Demo; 7] = [
        Demo::Todo,
        Demo::Pokemon,
        Demo::Tracks,
        Demo::Counter,
        Demo::Theme,
        Demo::RenderCount,
        Demo::InputMirror,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Demo::Todo => "Todo",
            Demo::Pokemon => "Pokémon",
            Demo::Tracks => "Tracks",
            Demo::Counter => "Reducer",
            Demo::Theme => "Theme",
            Demo::RenderCount => "Render count",
            Demo::InputMirror => "Input ref",
        }
    }
}

/// Class set applied to the todo markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleVariant {
    #[default]
    Vanilla,
    Modules,
    Styled,
}

impl StyleVariant {
    pub const ALL: [StyleVariant; 3] = [StyleVariant::Vanilla, StyleVariant::Modules, StyleVariant::Styled];

    pub fn label(&self) -> &'static str {
        match self {
            StyleVariant::Vanilla => "Plain CSS",
            StyleVariant::Modules => "CSS modules",
            StyleVariant::Styled => "Styled",
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    pub demo: Demo,
    pub variant: StyleVariant,
}

pub type GalleryStore = Store<GalleryState>;

pub fn new_gallery_store() -> GalleryStore {
    Store::new(GalleryState::default())
}

/// Switch demo, logging the change
pub fn store_select_demo(store: &GalleryStore, demo: Demo) {
    log::debug!("[APP] demo -> {}", demo.label());
    store.demo().set(demo);
}

pub fn store_select_variant(store: &GalleryStore, variant: StyleVariant) {
    store.variant().set(variant);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_labels_unique() {
        let mut labels: Vec<_> = Demo::ALL.iter().map(|d| d.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Demo::ALL.len());
    }

    #[test]
    fn test_select_demo() {
        let owner = Owner::new();
        owner.with(|| {
            let store = new_gallery_store();
            store_select_demo(&store, Demo::Pokemon);
            store_select_variant(&store, StyleVariant::Styled);
            assert_eq!(store.demo().get_untracked(), Demo::Pokemon);
            assert_eq!(store.variant().get_untracked(), StyleVariant::Styled);
        });
    }
}
