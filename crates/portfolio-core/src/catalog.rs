//! Static content shown on the page: skills, projects and carousel images.
//!
//! The catalog is read-only once the view is mounted. Defaults are the
//! sample content the site ships with; a config file can replace any list.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A skill with a self-assessed level shown as a progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0-100.
    pub level: u8,
    /// Stylesheet class used to color the bar.
    pub color: String,
}

impl Skill {
    /// Creates a new skill.
    pub fn new(name: impl Into<String>, level: u8, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            color: color.into(),
        }
    }

    /// Returns the inline style for the filled part of the bar.
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

/// A project card in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Technologies, in display order.
    pub tech: Vec<String>,
    pub link: String,
}

impl Project {
    /// Creates a new project.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        tech: &[&str],
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: image.into(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            link: link.into(),
        }
    }
}

/// All static lists rendered by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Images the about-section carousel rotates through.
    pub carousel_images: Vec<String>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            carousel_images: vec![
                "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=400&h=300&fit=crop".into(),
                "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&h=300&fit=crop".into(),
                "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400&h=300&fit=crop".into(),
                "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=400&h=300&fit=crop".into(),
            ],
            skills: vec![
                Skill::new("React.js", 90, "bg-blue-500"),
                Skill::new("JavaScript", 85, "bg-yellow-500"),
                Skill::new("Node.js", 80, "bg-green-500"),
                Skill::new("Python", 75, "bg-blue-600"),
                Skill::new("MongoDB", 70, "bg-green-600"),
                Skill::new("Tailwind CSS", 88, "bg-cyan-500"),
                Skill::new("Flutter", 78, "bg-black"),
            ],
            projects: vec![
                Project::new(
                    "E-Commerce Platform",
                    "Full-stack e-commerce solution with React, Node.js, and MongoDB",
                    "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=250&fit=crop",
                    &["React", "Node.js", "MongoDB", "Stripe"],
                    "#",
                ),
                Project::new(
                    "Task Management App",
                    "Collaborative task management tool with real-time updates",
                    "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=250&fit=crop",
                    &["React", "Firebase", "Material-UI"],
                    "#",
                ),
                Project::new(
                    "Weather Dashboard",
                    "Beautiful weather app with location-based forecasts",
                    "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=400&h=250&fit=crop",
                    &["React", "OpenWeather API", "Chart.js"],
                    "#",
                ),
            ],
        }
    }
}

impl Catalog {
    /// Returns the number of carousel images.
    pub fn image_count(&self) -> usize {
        self.carousel_images.len()
    }

    /// Returns the carousel image at `index`, if any.
    pub fn carousel_image(&self, index: usize) -> Option<&str> {
        self.carousel_images.get(index).map(String::as_str)
    }

    /// Checks the invariants the view relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.carousel_images.is_empty() {
            return Err(ConfigError::NoCarouselImages);
        }

        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ConfigError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }

        Ok(())
    }
}
