//! Page footer.

use dioxus::prelude::*;
use portfolio_core::SiteConfig;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let copyright = config.profile.copyright();

    rsx! {
        footer {
            class: "footer",
            p { "{copyright}" }
        }
    }
}
