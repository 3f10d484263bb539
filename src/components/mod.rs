//! UI Components
//!
//! One Leptos component per demo, plus the shell controls.

mod counter_panel;
mod demo_tab_bar;
mod input_mirror;
mod pokemon_browser;
mod render_count;
mod theme_panel;
mod todo_app;
mod tracks_panel;
mod variant_selector;

pub use counter_panel::CounterPanel;
pub use demo_tab_bar::DemoTabBar;
pub use input_mirror::InputMirror;
pub use pokemon_browser::PokemonBrowser;
pub use render_count::RenderCount;
pub use theme_panel::ThemePanel;
pub use todo_app::TodoApp;
pub use tracks_panel::TracksPanel;
pub use variant_selector::VariantSelector;
