//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml` and owns the
//! built-in constant for it:
//!
//! | Module   | TOML Section     | Built-in     |
//! |----------|------------------|--------------|
//! | `site`   | `[site]`         | `SITE`       |
//! | `logo`   | `[logo_image]`   | `LOGO_IMAGE` |
//! | `social` | `[[socials]]`    | `SOCIALS`    |

mod logo;
mod site;
mod social;

pub use logo::{LOGO_IMAGE, LogoImageSettings};
pub use site::{SITE, SiteSettings};
pub use social::{LinkScheme, SOCIALS, SocialLink, active_socials, validate_socials};
