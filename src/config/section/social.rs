//! `[[socials]]` section: outbound profile links in display order.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/plutaniano"
//! link_title = "GitHub"
//! active = true
//!
//! [[socials]]
//! name = "Mail"
//! href = "mailto:site@lucas.rs"
//! link_title = "Email"
//! active = false   # hidden, kept in place
//! ```

use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Built-in social links, in display order.
pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: Cow::Borrowed("Github"),
        href: Cow::Borrowed("https://github.com/plutaniano"),
        link_title: Cow::Borrowed("GitHub"),
        active: true,
    },
    SocialLink {
        name: Cow::Borrowed("LinkedIn"),
        href: Cow::Borrowed("https://linkedin.com/in/lucasrs001"),
        link_title: Cow::Borrowed("LinkedIn"),
        active: true,
    },
    SocialLink {
        name: Cow::Borrowed("Mail"),
        href: Cow::Borrowed("mailto:site@lucas.rs"),
        link_title: Cow::Borrowed("Email"),
        active: true,
    },
];

/// One outbound profile link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "socials")]
pub struct SocialLink {
    /// Platform name, unique within the list.
    pub name: Cow<'static, str>,

    /// Target URI (http, https or mailto).
    pub href: Cow<'static, str>,

    /// Display and accessibility label.
    pub link_title: Cow<'static, str>,

    /// Render this link. Set to false instead of removing the entry.
    pub active: bool,
}

/// URI scheme accepted for a social link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScheme {
    Http,
    Https,
    Mailto,
}

impl LinkScheme {
    /// Classify an href. Returns `None` for unparsable URIs and other schemes.
    pub fn of(href: &str) -> Option<Self> {
        let parsed = url::Url::parse(href).ok()?;
        match parsed.scheme() {
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            "mailto" => Some(Self::Mailto),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Mailto => "mailto",
        }
    }
}

impl fmt::Display for LinkScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SocialLink {
    /// Scheme of `href`, if it is one of the accepted ones.
    pub fn scheme(&self) -> Option<LinkScheme> {
        LinkScheme::of(&self.href)
    }

    /// Validate a single entry. `index` is zero-based.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let fields = &Self::FIELDS;
        let entry = self.describe(index);

        if self.name.trim().is_empty() {
            diag.error(fields.name, format!("{entry}: must not be empty"));
        }
        if self.link_title.trim().is_empty() {
            diag.error(fields.link_title, format!("{entry}: must not be empty"));
        }

        match self.scheme() {
            None => diag.error_with_hint(
                fields.href,
                format!("{entry}: '{}' must use http, https or mailto", self.href),
                "use format like https://github.com/user or mailto:me@example.com",
            ),
            Some(LinkScheme::Mailto) if !self.has_mailto_address() => diag.error_with_hint(
                fields.href,
                format!("{entry}: mailto link has no address"),
                "use format like mailto:me@example.com",
            ),
            Some(_) => {}
        }
    }

    /// Whether a `mailto:` href names a recipient.
    ///
    /// Read from the parsed URL: the scheme is case-insensitive and the
    /// query (`?subject=...`) is not part of the path.
    fn has_mailto_address(&self) -> bool {
        url::Url::parse(&self.href).is_ok_and(|parsed| !parsed.path().trim().is_empty())
    }

    fn describe(&self, index: usize) -> String {
        if self.name.trim().is_empty() {
            format!("entry #{}", index + 1)
        } else {
            format!("entry #{} `{}`", index + 1, self.name)
        }
    }
}

/// Links a renderer should display, in their original order.
pub fn active_socials(links: &[SocialLink]) -> impl Iterator<Item = &SocialLink> {
    links.iter().filter(|link| link.active)
}

/// Validate the whole list: non-empty, unique names, valid entries.
pub fn validate_socials(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    if links.is_empty() {
        diag.error_with_hint(
            FieldPath::new("socials"),
            "at least one social link is required",
            "add a [[socials]] entry, set active = false to hide it",
        );
        return;
    }

    let mut seen = FxHashSet::default();
    for (index, link) in links.iter().enumerate() {
        link.validate(index, diag);

        if !link.name.trim().is_empty() && !seen.insert(link.name.as_ref()) {
            diag.error_with_hint(
                SocialLink::FIELDS.name,
                format!("entry #{}: duplicate name `{}`", index + 1, link.name),
                "names must be unique, set active = false to hide a link instead",
            );
        }
    }
}
