//! About section: image carousel and skill bars.

use dioxus::prelude::*;
use portfolio_core::{NavSection, SiteConfig, Skill, ViewState};

use super::SectionHeader;

#[component]
pub fn About(state: Signal<ViewState>) -> Element {
    let config = use_context::<SiteConfig>();
    let catalog = &config.catalog;
    let index = state.read().carousel_index;
    let image = catalog.carousel_image(index).unwrap_or_default();

    rsx! {
        section {
            id: NavSection::About.anchor(),
            class: "section section-alt",

            SectionHeader {
                title: "About Me".to_string(),
                subtitle: config.profile.about_tagline.clone(),
            }

            div {
                class: "about-grid",

                // Carousel
                div {
                    class: "carousel",
                    div {
                        class: "carousel-frame",
                        img {
                            class: "carousel-image",
                            src: "{image}",
                            alt: "Skills",
                        }
                        div { class: "carousel-shade" }
                    }
                    div {
                        class: "carousel-dots",
                        for i in 0..catalog.image_count() {
                            span {
                                key: "{i}",
                                class: if i == index { "carousel-dot carousel-dot-active" } else { "carousel-dot" },
                            }
                        }
                    }
                }

                div {
                    class: "about-body",
                    p {
                        class: "about-text",
                        "{config.profile.about}"
                    }
                    div {
                        class: "skills",
                        for skill in catalog.skills.iter() {
                            SkillBar {
                                key: "{skill.name}",
                                skill: skill.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single skill with its level bar.
#[component]
fn SkillBar(skill: Skill) -> Element {
    rsx! {
        div {
            class: "skill",
            div {
                class: "skill-head",
                span {
                    class: "skill-name",
                    "{skill.name}"
                }
                span {
                    class: "skill-level",
                    "{skill.level}%"
                }
            }
            div {
                class: "skill-track",
                div {
                    class: "skill-fill {skill.color}",
                    style: "{skill.bar_style()}",
                }
            }
        }
    }
}
