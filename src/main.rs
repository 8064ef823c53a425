//! Sheaf - paginate a site manifest into linked pages.

use anyhow::{Result, bail};
use clap::Parser;
use sheaf::{
    build::{build_site, check_site},
    cli::{Cli, Commands},
    config::SiteConfig,
    log,
};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config, cli.to_stdout()).map(|_| ()),
        Commands::Check => check_site(&config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    if !config.build.manifest.exists() {
        bail!("Manifest not found: {}", config.build.manifest.display());
    }
    config.validate()?;

    Ok(config)
}
