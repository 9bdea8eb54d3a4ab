//! `socials` command: list links the way a renderer would see them.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::config::SiteConfig;
use crate::config::section::SocialLink;

pub fn list_socials(config: &SiteConfig, all: bool, json: bool) -> Result<()> {
    let links = select(config, all);
    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    if links.is_empty() {
        crate::log!("socials"; "no active social links");
        return Ok(());
    }

    for line in render_table(&links) {
        println!("{line}");
    }
    Ok(())
}

/// Links in display order; inactive ones only when `all` is set.
fn select(config: &SiteConfig, all: bool) -> Vec<&SocialLink> {
    if all {
        config.socials.iter().collect()
    } else {
        config.active_socials().collect()
    }
}

/// One aligned line per link: name, title, scheme, href.
fn render_table(links: &[&SocialLink]) -> Vec<String> {
    // Padding counts chars, so widths must too
    let name_width = links.iter().map(|l| l.name.chars().count()).max().unwrap_or(0);
    let title_width = links
        .iter()
        .map(|l| l.link_title.chars().count())
        .max()
        .unwrap_or(0);

    links
        .iter()
        .map(|link| {
            let scheme = link.scheme().map_or("?", |s| s.as_str());
            let line = format!(
                "{:<name_width$}  {:<title_width$}  {:<6}  {}",
                link.name, link.link_title, scheme, link.href
            );
            if link.active {
                line
            } else {
                format!(
                    "{} {}",
                    line,
                    "(inactive)".if_supports_color(Stream::Stdout, |t| t.dimmed())
                )
            }
        })
        .collect()
}
