//! Theme system for the portfolio.

use dioxus::prelude::*;

/// Available themes for the portfolio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Red on void-black corporate terminal
    #[default]
    Arasaka,
}

impl Theme {
    /// Returns the CSS class value for this theme.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Arasaka => "arasaka",
        }
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
