//! Hero section at the top of the page.

use dioxus::prelude::*;
use portfolio_core::{NavSection, SiteConfig};

use super::icons;

#[component]
pub fn Hero() -> Element {
    let config = use_context::<SiteConfig>();
    let profile = &config.profile;
    let contact_href = NavSection::Contact.href();
    let download = icons::DOWNLOAD;
    let message = icons::MESSAGE;

    rsx! {
        section {
            id: NavSection::Home.anchor(),
            class: "section hero",

            div {
                class: "hero-avatar-wrap",
                img {
                    class: "hero-avatar",
                    src: "{profile.avatar}",
                    alt: "Profile",
                }
                span { class: "hero-status" }
            }

            h1 {
                class: "hero-title",
                "Hi, I'm "
                span {
                    class: "gradient-text",
                    "{profile.greeting_name}"
                }
            }

            p {
                class: "hero-headline",
                "{profile.headline}"
            }

            div {
                class: "hero-actions",
                // No CV is bundled; the button is decorative
                button {
                    class: "btn btn-primary",
                    "{download} Download CV"
                }
                a {
                    class: "btn btn-outline",
                    href: "{contact_href}",
                    "{message} Get In Touch"
                }
            }
        }
    }
}
