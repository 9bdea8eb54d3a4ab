//! `template` command: a starter `site.toml` holding the built-in values.

use anyhow::Result;
use serde::Serialize;

use crate::config::section::{
    LOGO_IMAGE, LogoImageSettings, SITE, SOCIALS, SiteSettings, SocialLink,
};

/// Print the template to stdout.
pub fn print_template() -> Result<()> {
    print!("{}", render_template()?);
    Ok(())
}

/// Render `site.toml` with every built-in value spelled out.
pub fn render_template() -> Result<String> {
    #[derive(Serialize)]
    struct Socials<'a> {
        socials: &'a [SocialLink],
    }

    let mut out = String::from("# site.toml - every value below is the built-in default.\n");
    out.push_str("# Remove a key to keep its built-in value.\n\n");

    push_doc(&mut out, SiteSettings::TEMPLATE_DOC);
    out.push_str(&format!("[{}]\n", SiteSettings::TEMPLATE_SECTION));
    out.push_str(&toml::to_string(&SITE)?);
    out.push('\n');

    push_doc(&mut out, LogoImageSettings::TEMPLATE_DOC);
    out.push_str(&format!("[{}]\n", LogoImageSettings::TEMPLATE_SECTION));
    out.push_str(&toml::to_string(&LOGO_IMAGE)?);
    out.push('\n');

    push_doc(&mut out, SocialLink::TEMPLATE_DOC);
    out.push_str("# Listing any socials replaces the built-in list, in display order.\n");
    out.push_str(&toml::to_string(&Socials { socials: SOCIALS })?);

    Ok(out)
}

fn push_doc(out: &mut String, doc: &str) {
    for line in doc.lines() {
        out.push_str("# ");
        out.push_str(line.trim());
        out.push('\n');
    }
}
