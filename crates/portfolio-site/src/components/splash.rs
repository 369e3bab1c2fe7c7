//! Loading splash shown until the loading gate opens.

use dioxus::prelude::*;

/// Full-screen splash with the owner's name and a spinner.
#[component]
pub fn Splash(name: String) -> Element {
    rsx! {
        div {
            class: "splash",

            // Animated background
            div {
                class: "splash-bg",
                div { class: "orb orb-top" }
                div { class: "orb orb-bottom" }
                div { class: "orb orb-center" }
            }

            div {
                class: "splash-content",
                div { class: "spinner" }
                h1 {
                    class: "splash-name",
                    "{name}"
                }
                p {
                    class: "splash-text",
                    "Loading..."
                }
            }
        }
    }
}
