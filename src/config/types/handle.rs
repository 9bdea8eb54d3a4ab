//! Global read-only config handle.
//!
//! The config is loaded once at startup and never replaced, so a
//! `OnceLock` is enough. Readers that run before `init_config` see the
//! built-in values.

use crate::config::SiteConfig;
use std::sync::{Arc, LazyLock, OnceLock};

static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

static BUILTIN: LazyLock<Arc<SiteConfig>> = LazyLock::new(|| Arc::new(SiteConfig::builtin()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.get().unwrap_or(&*BUILTIN).clone()
}

/// Publish the loaded config. Later calls keep the first value.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    CONFIG.get_or_init(|| Arc::new(config)).clone()
}
