//! Project gallery.

use dioxus::prelude::*;
use portfolio_core::{NavSection, Project, SiteConfig};

use super::{icons, SectionHeader};

#[component]
pub fn ProjectGallery() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section {
            id: NavSection::Projects.anchor(),
            class: "section",

            SectionHeader {
                title: "My Projects".to_string(),
                subtitle: "Here are some of my recent works".to_string(),
            }

            div {
                class: "projects-grid",
                for (i, project) in config.catalog.projects.iter().enumerate() {
                    ProjectCard {
                        key: "{i}",
                        project: project.clone(),
                    }
                }
            }
        }
    }
}

/// A single project card.
#[component]
fn ProjectCard(project: Project) -> Element {
    let external = icons::EXTERNAL;

    rsx! {
        div {
            class: "project-card",

            img {
                class: "project-image",
                src: "{project.image}",
                alt: "{project.title}",
            }

            div {
                class: "project-body",
                h3 {
                    class: "project-title",
                    "{project.title}"
                }
                p {
                    class: "project-description",
                    "{project.description}"
                }

                div {
                    class: "project-tech",
                    for (i, tech) in project.tech.iter().enumerate() {
                        span {
                            key: "{i}",
                            class: "tech-chip",
                            "{tech}"
                        }
                    }
                }

                a {
                    class: "project-link",
                    href: "{project.link}",
                    "View Project {external}"
                }
            }
        }
    }
}
