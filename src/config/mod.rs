//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Section definitions and built-in values
//! │   ├── logo       # [logo_image]
//! │   ├── site       # [site]
//! │   └── social     # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every section is optional. Anything missing from `site.toml` (or the
//! whole file) falls back to the built-in constants.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config,
};

use section::{
    LOGO_IMAGE, LogoImageSettings, SITE, SOCIALS, SiteSettings, SocialLink, active_socials,
    validate_socials,
};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "site.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty for built-ins (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSettings,

    /// Logo image settings
    #[serde(default)]
    pub logo_image: LogoImageSettings,

    /// Social links, in display order
    #[serde(default = "builtin_socials")]
    pub socials: Vec<SocialLink>,
}

fn builtin_socials() -> Vec<SocialLink> {
    SOCIALS.to_vec()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteConfig {
    /// The built-in configuration, without any `site.toml`.
    pub fn builtin() -> Self {
        Self {
            config_path: PathBuf::new(),
            site: SITE,
            logo_image: LOGO_IMAGE,
            socials: builtin_socials(),
        }
    }

    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Without one, the
    /// built-in values are used. The result is validated before returning.
    pub fn load(cli: &Cli) -> Result<Self> {
        // Before resolving, so the lookup itself can be traced
        if cli.verbose {
            crate::logger::set_verbose(true);
        }

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            // An explicitly named file has to exist
            None if cli.config != Path::new(DEFAULT_CONFIG_NAME) => {
                return Err(ConfigError::Validation(format!(
                    "config file `{}` not found",
                    cli.config.display()
                ))
                .into());
            }
            None => {
                debug!("config"; "{} not found, using built-in values", cli.config.display());
                Self::builtin()
            }
        };

        config.apply_cli_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Whether the values came from a file rather than the built-ins.
    pub fn is_builtin(&self) -> bool {
        self.config_path.as_os_str().is_empty()
    }

    /// Social links a renderer should display, in order.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        active_socials(&self.socials)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global CLI overrides.
    fn apply_cli_options(&mut self, cli: &Cli) {
        // Override site URL if provided via CLI
        if let Some(ref url) = cli.site_url {
            self.site.website = Cow::Owned(url.clone());
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.logo_image.validate(&mut diag);
        validate_socials(&self.socials, &mut diag);

        if !self.socials.is_empty() && self.active_socials().next().is_none() {
            diag.warn(
                FieldPath::new("socials"),
                "no active social links, nothing will be rendered",
            );
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
