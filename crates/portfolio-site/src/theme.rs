//! Theme root for the portfolio.
//!
//! The theme is passed down from the view state instead of living in a
//! global signal, so the page always renders the mounted view's flag.

use dioxus::prelude::*;
use portfolio_core::Theme;

/// Root component that applies `theme` to its subtree.
#[component]
pub fn ThemedRoot(theme: Theme, children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
