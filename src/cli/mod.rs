//! Command-line interface module.

mod args;
pub mod check;
pub mod show;
pub mod socials;
pub mod template;

pub use args::{Cli, Commands, OutputFormat, ShowArgs};
