//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// A dotted path into `site.toml`, e.g. `site.posts_per_page`.
///
/// Section structs get one constant per field from `#[derive(Config)]`:
///
/// ```ignore
/// diag.error(SiteSettings::FIELDS.website, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |t| t.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::{LogoImageSettings, SiteSettings, SocialLink};

    #[test]
    fn test_generated_paths() {
        assert_eq!(SiteSettings::FIELDS.website.as_str(), "site.website");
        assert_eq!(
            LogoImageSettings::FIELDS.height.as_str(),
            "logo_image.height"
        );
        assert_eq!(SocialLink::FIELDS.href.as_str(), "socials.href");
    }

    #[test]
    fn test_display_is_quoted() {
        let shown = FieldPath::new("site.title").to_string();
        assert!(shown.contains("`site.title`"));
    }
}
