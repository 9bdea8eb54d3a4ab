//! lucas-site - print and check the lucas.rs site configuration.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use lucas_site::cli::{self, Cli, Commands};
use lucas_site::config::{SiteConfig, init_config};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    // Built-ins only, a broken site.toml must not block it
    if let Commands::Template = cli.command {
        return cli::template::print_template();
    }

    let config = load(cli)?;
    match &cli.command {
        Commands::Show { args } => cli::show::show_config(args, &config),
        Commands::Socials { all, json } => cli::socials::list_socials(&config, *all, *json),
        Commands::Check => cli::check::check_config(&config),
        Commands::Template => cli::template::print_template(),
    }
}

/// Load, validate and publish the config.
fn load(cli: &Cli) -> Result<Arc<SiteConfig>> {
    Ok(init_config(SiteConfig::load(cli)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli_for(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lucas-site").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_commands_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[site]\ntitle = \"Preview\"\n").unwrap();
        let path = path.to_str().unwrap();

        run(&cli_for(&["-C", path, "check"])).unwrap();
        run(&cli_for(&["-C", path, "show", "--format", "json"])).unwrap();
        run(&cli_for(&["-C", path, "socials", "--all"])).unwrap();
    }

    #[test]
    fn test_run_template_ignores_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[site\n").unwrap();
        let path = path.to_str().unwrap();

        run(&cli_for(&["-C", path, "template"])).unwrap();
        assert!(run(&cli_for(&["-C", path, "check"])).is_err());
    }
}
