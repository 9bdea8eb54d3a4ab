//! `check` command.
//!
//! Validation already ran while loading, so reaching this point means the
//! config is valid. This only reports what was checked.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;

pub fn check_config(config: &SiteConfig) -> Result<()> {
    log!("check"; "{}", summary(config));
    Ok(())
}

fn summary(config: &SiteConfig) -> String {
    let source = if config.is_builtin() {
        "built-in config".to_string()
    } else {
        config.config_path.display().to_string()
    };
    let total = config.socials.len();
    let active = config.active_socials().count();
    format!(
        "{source} ok: {} post{} per page, {total} social link{} ({active} active)",
        config.site.posts_per_page,
        if config.site.posts_per_page == 1 { "" } else { "s" },
        if total == 1 { "" } else { "s" },
    )
}
