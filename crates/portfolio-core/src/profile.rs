//! Owner profile and social links.

use serde::{Deserialize, Serialize};

/// Who the portfolio belongs to and how to reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Name in the nav bar, splash screen and footer.
    pub name: String,
    /// Name in the hero greeting.
    pub greeting_name: String,
    pub headline: String,
    pub avatar: String,
    /// Subtitle under the "About Me" heading.
    pub about_tagline: String,
    pub about: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub copyright_year: u16,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Albert Irasubiza".into(),
            greeting_name: "Rutwe mudenge".into(),
            headline: "Full Stack Developer & UI/UX Designer".into(),
            avatar: "test.jpg".into(),
            about_tagline: "Passionate developer with 3+ years of experience".into(),
            about: "I'm a passionate full-stack developer with expertise in modern web \
                    technologies. I love creating beautiful, functional applications that \
                    solve real-world problems. My journey in tech started 3 years ago, and \
                    I've been constantly learning and evolving ever since."
                .into(),
            email: "albertirasubiza@gmail.com".into(),
            phone: "+25 0784100051".into(),
            location: "Kigali,Rwanda".into(),
            copyright_year: 2025,
        }
    }
}

impl Profile {
    /// Returns the footer copyright line.
    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_year, self.name
        )
    }
}

/// Social networks a link can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
    Instagram,
    Facebook,
}

impl SocialKind {
    /// Returns the display name for the network.
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Twitter => "Twitter",
            SocialKind::Instagram => "Instagram",
            SocialKind::Facebook => "Facebook",
        }
    }
}

/// A link in the "Follow Me" row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

impl SocialLink {
    pub fn new(kind: SocialKind, href: impl Into<String>) -> Self {
        Self {
            kind,
            href: href.into(),
        }
    }
}

/// Returns the links the site ships with.
pub fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new(SocialKind::GitHub, "#"),
        SocialLink::new(SocialKind::LinkedIn, "#"),
        SocialLink::new(SocialKind::Twitter, "#"),
        SocialLink::new(SocialKind::Instagram, "#"),
        SocialLink::new(SocialKind::Facebook, "/"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        let profile = Profile::default();
        assert_eq!(
            profile.copyright(),
            "© 2025 Albert Irasubiza. All rights reserved."
        );
    }

    #[test]
    fn test_social_kind_parses_lowercase() {
        let link: SocialLink =
            toml::from_str("kind = \"github\"\nhref = \"https://github.com/\"").unwrap();
        assert_eq!(link.kind, SocialKind::GitHub);
        assert_eq!(link.kind.label(), "GitHub");
    }
}
