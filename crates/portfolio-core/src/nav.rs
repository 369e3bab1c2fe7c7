//! Page sections reachable from the navigation bar.

/// A section of the page with an anchor in the nav bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSection {
    Home,
    About,
    Projects,
    Contact,
}

impl NavSection {
    /// All sections, in page order.
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::About,
        NavSection::Projects,
        NavSection::Contact,
    ];

    /// Returns the element id of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::About => "about",
            NavSection::Projects => "projects",
            NavSection::Contact => "contact",
        }
    }

    /// Returns the in-page link target.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Returns the link text.
    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::About => "About",
            NavSection::Projects => "Projects",
            NavSection::Contact => "Contact",
        }
    }
}
