//! Fixed navigation bar with the desktop links and the mobile menu.

use dioxus::prelude::*;
use portfolio_core::{NavSection, SiteConfig, ViewEvent, ViewState};

use super::icons;

#[component]
pub fn NavBar(mut state: Signal<ViewState>) -> Element {
    let config = use_context::<SiteConfig>();
    let (theme, menu_open) = {
        let s = state.read();
        (s.theme(), s.mobile_menu_open)
    };
    let theme_glyph = icons::theme_toggle_glyph(theme);
    let menu_glyph = icons::menu_glyph(menu_open);
    let logo = icons::CODE;

    rsx! {
        nav {
            class: "nav",
            div {
                class: "nav-row",

                div {
                    class: "nav-brand",
                    div {
                        class: "nav-logo",
                        "{logo}"
                    }
                    span {
                        class: "nav-name",
                        "{config.profile.name}"
                    }
                }

                // Desktop menu
                div {
                    class: "nav-desktop",
                    for section in NavSection::ALL {
                        a {
                            key: "{section.anchor()}",
                            class: "nav-link",
                            href: "{section.href()}",
                            "{section.label()}"
                        }
                    }
                    button {
                        class: "icon-btn",
                        title: "{theme.display_name()} theme",
                        onclick: move |_| state.write().process_event(ViewEvent::ToggleDarkMode),
                        "{theme_glyph}"
                    }
                }

                // Mobile controls
                div {
                    class: "nav-mobile-controls",
                    button {
                        class: "icon-btn",
                        onclick: move |_| state.write().process_event(ViewEvent::ToggleDarkMode),
                        "{theme_glyph}"
                    }
                    button {
                        class: "icon-btn",
                        onclick: move |_| state.write().process_event(ViewEvent::ToggleMobileMenu),
                        "{menu_glyph}"
                    }
                }
            }

            if menu_open {
                div {
                    class: "nav-mobile-menu",
                    for section in NavSection::ALL {
                        a {
                            key: "{section.anchor()}",
                            class: "nav-link",
                            href: "{section.href()}",
                            onclick: move |_| {
                                state.write().process_event(ViewEvent::NavLinkActivated(section));
                            },
                            "{section.label()}"
                        }
                    }
                }
            }
        }
    }
}
