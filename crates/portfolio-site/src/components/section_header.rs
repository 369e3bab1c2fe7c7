//! Centered heading shared by the page sections.

use dioxus::prelude::*;

#[component]
pub fn SectionHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            class: "section-header",
            h2 {
                class: "section-title",
                "{title}"
            }
            p {
                class: "section-subtitle",
                "{subtitle}"
            }
        }
    }
}
