//! Text glyphs used in place of an icon font.

use portfolio_core::{SocialKind, Theme};

pub const MOON: &str = "☾";
pub const SUN: &str = "☀";
pub const MENU: &str = "☰";
pub const CLOSE: &str = "✕";
pub const CODE: &str = "</>";
pub const MAIL: &str = "✉";
pub const PHONE: &str = "☎";
pub const PIN: &str = "⌖";
pub const DOWNLOAD: &str = "⤓";
pub const MESSAGE: &str = "✎";
pub const EXTERNAL: &str = "↗";

/// Returns the glyph for the dark-mode button.
///
/// Shows where a click would take you: the sun while dark, the moon while light.
pub fn theme_toggle_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() { SUN } else { MOON }
}

/// Returns the glyph for the mobile menu button.
pub fn menu_glyph(open: bool) -> &'static str {
    if open { CLOSE } else { MENU }
}

/// Returns the short mark for a social network.
pub fn social_glyph(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "GH",
        SocialKind::LinkedIn => "in",
        SocialKind::Twitter => "X",
        SocialKind::Instagram => "IG",
        SocialKind::Facebook => "f",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_glyph() {
        assert_eq!(theme_toggle_glyph(Theme::Light), MOON);
        assert_eq!(theme_toggle_glyph(Theme::Dark), SUN);
    }

    #[test]
    fn test_menu_glyph() {
        assert_eq!(menu_glyph(false), MENU);
        assert_eq!(menu_glyph(true), CLOSE);
    }
}
