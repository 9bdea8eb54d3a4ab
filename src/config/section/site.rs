//! `[site]` section: metadata describing the site as a whole.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::config::ConfigDiagnostics;

/// Built-in site metadata.
pub const SITE: SiteSettings = SiteSettings {
    website: Cow::Borrowed("https://lucas.rs/"),
    author: Cow::Borrowed("Lucas Rodrigues"),
    description: Cow::Borrowed("My personal website."),
    title: Cow::Borrowed("lucas.rs"),
    default_og_image: Cow::Borrowed("astropaper-og.jpg"),
    light_and_dark_mode: true,
    posts_per_page: 3,
};

/// Site metadata (title, author, pagination size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSettings {
    /// Canonical site origin, e.g. "https://example.com/".
    #[config(inline_doc)]
    pub website: Cow<'static, str>,

    /// Author display name.
    #[config(inline_doc)]
    pub author: Cow<'static, str>,

    /// Page meta description.
    #[config(inline_doc)]
    pub description: Cow<'static, str>,

    /// Site or brand name.
    #[config(inline_doc)]
    pub title: Cow<'static, str>,

    /// Fallback social preview image.
    #[config(inline_doc)]
    pub default_og_image: Cow<'static, str>,

    /// Offer both light and dark color schemes.
    #[config(inline_doc)]
    pub light_and_dark_mode: bool,

    /// Pagination page size, at least 1.
    #[config(inline_doc)]
    pub posts_per_page: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SITE
    }
}

impl SiteSettings {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - every text field is non-empty
    /// - `website` is an absolute http(s) URL with a host
    /// - `posts_per_page` is at least 1
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let fields = &Self::FIELDS;
        for (value, field) in [
            (&self.website, fields.website),
            (&self.author, fields.author),
            (&self.description, fields.description),
            (&self.title, fields.title),
            (&self.default_og_image, fields.default_og_image),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        if !self.website.trim().is_empty() {
            self.validate_website(diag);
        }

        if self.posts_per_page == 0 {
            diag.error_with_hint(
                fields.posts_per_page,
                "must be at least 1",
                format!("set {} = {}", fields.posts_per_page.as_str(), SITE.posts_per_page),
            );
        }
    }

    fn validate_website(&self, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.website;
        match url::Url::parse(&self.website) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com/",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field,
                        "URL must have a valid host",
                        "use format like https://example.com/",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com/",
                );
            }
        }
    }
}
