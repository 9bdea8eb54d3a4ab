//! lucas-site - typed configuration for the `lucas.rs` personal website.
//!
//! The built-in values are plain constants:
//!
//! ```
//! use lucas_site::{LOGO_IMAGE, SITE, SOCIALS};
//!
//! assert_eq!(SITE.title, "lucas.rs");
//! assert_eq!(LOGO_IMAGE.width, 216);
//! assert_eq!(SOCIALS.len(), 3);
//! ```
//!
//! A `site.toml` can override any of them; see [`config::SiteConfig`].

pub mod cli;
pub mod config;
pub mod logger;

pub use config::section::{
    LOGO_IMAGE, LinkScheme, LogoImageSettings, SITE, SOCIALS, SiteSettings, SocialLink,
    active_socials,
};
pub use config::{SiteConfig, cfg, init_config};
