//! Command-line interface.
//!
//! `serve` runs the portal; the `nav` commands work on a navigation config
//! without starting the server.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::menu::{NavConfig, RouteTable, Section};
use crate::models::Role;

/// STMS portal kernel.
#[derive(Debug, Parser)]
#[command(name = "stms", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Inspect navigation configuration.
    Nav {
        #[command(subcommand)]
        action: NavCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum NavCommand {
    /// Validate a navigation config and exit non-zero on error.
    Check {
        /// YAML file to check (default: STMS_NAV_CONFIG or the built-in config).
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the navigation a role would see.
    Show {
        #[arg(long)]
        role: Role,
        /// YAML file to use (default: STMS_NAV_CONFIG or the built-in config).
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Validate a navigation config and print a summary.
pub fn cmd_nav_check(file: Option<&Path>) -> Result<()> {
    let config = load(file)?;

    println!(
        "navigation config OK: {} entries (main: {}, settings: {})",
        config.len(),
        config.section(Section::Main).len(),
        config.section(Section::Settings).len()
    );
    for role in Role::ALL {
        println!(
            "  {:<12} {} visible",
            role.as_str(),
            config.filter_for_role(role).len()
        );
    }

    Ok(())
}

/// Print the role-filtered navigation as an outline.
pub fn cmd_nav_show(role: Role, file: Option<&Path>) -> Result<()> {
    let config = load(file)?;
    print!("{}", config.filter_for_role(role).outline());
    Ok(())
}

fn load(file: Option<&Path>) -> Result<NavConfig> {
    let source = file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    NavConfig::load(file, &RouteTable::application())
        .with_context(|| format!("invalid navigation config ({source})"))
}
