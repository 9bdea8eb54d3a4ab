//! `show` command: print the resolved configuration.

use anyhow::{Context, Result};

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::SiteConfig;

pub fn show_config(args: &ShowArgs, config: &SiteConfig) -> Result<()> {
    println!("{}", render_config(args, config)?);
    Ok(())
}

/// Serialize the config in the requested format.
pub fn render_config(args: &ShowArgs, config: &SiteConfig) -> Result<String> {
    let out = match args.format {
        OutputFormat::Toml => toml::to_string(config).context("failed to serialize TOML")?,
        OutputFormat::Json if args.pretty => {
            serde_json::to_string_pretty(config).context("failed to serialize JSON")?
        }
        OutputFormat::Json => serde_json::to_string(config).context("failed to serialize JSON")?,
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: OutputFormat, pretty: bool) -> ShowArgs {
        ShowArgs { format, pretty }
    }

    #[test]
    fn test_toml_round_trips() {
        let config = SiteConfig::builtin();
        let out = render_config(&args(OutputFormat::Toml, false), &config).unwrap();
        assert_eq!(SiteConfig::from_str(&out).unwrap(), config);
    }

    #[test]
    fn test_json_compact_and_pretty() {
        let config = SiteConfig::builtin();
        let compact = render_config(&args(OutputFormat::Json, false), &config).unwrap();
        let pretty = render_config(&args(OutputFormat::Json, true), &config).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["site"]["title"], "lucas.rs");
    }

    #[test]
    fn test_json_keeps_field_order() {
        let out = render_config(&args(OutputFormat::Json, false), &SiteConfig::builtin()).unwrap();
        let site = out.find("\"site\"").unwrap();
        let logo = out.find("\"logo_image\"").unwrap();
        let socials = out.find("\"socials\"").unwrap();
        assert!(site < logo && logo < socials);
    }
}
