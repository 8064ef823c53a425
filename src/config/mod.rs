//! Site configuration management for `sheaf.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[build]`      | Manifest and output paths                      |
//! | `[pagination]` | Default page size, provider and opt-in marker  |
//! | `[permalink]`  | Site-wide permalink pattern                    |
//!
//! # Example
//!
//! ```toml
//! [build]
//! manifest = "site.json"
//! output = "public"
//!
//! [pagination]
//! max_per_page = 5
//!
//! [permalink]
//! pattern = "pretty"
//! ```

mod build;
pub mod defaults;
mod error;
mod pagination;
mod permalink;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use pagination::PagingConfig;
pub use permalink::PermalinkConfig;

use crate::cli::{Cli, Commands};
use crate::paginate::ProviderRef;
use crate::permalink::PermalinkPattern;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing sheaf.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Input and output paths
    #[serde(default)]
    pub build: BuildConfig,

    /// Pagination defaults
    #[serde(default)]
    pub pagination: PagingConfig,

    /// Permalink settings
    #[serde(default)]
    pub permalink: PermalinkConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute path of the export file.
    pub fn export_path(&self) -> PathBuf {
        self.build.output.join(&self.build.export)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        if let Commands::Build {
            manifest,
            output,
            max_per_page,
            ..
        } = &cli.command
        {
            Self::update_option(&mut self.build.manifest, manifest.as_ref());
            Self::update_option(&mut self.build.output, output.as_ref());
            Self::update_option(&mut self.pagination.max_per_page, max_per_page.as_ref());
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.manifest = Self::normalize_path(&root.join(&self.build.manifest));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let paging = &self.pagination;
        if paging.max_per_page <= 0 {
            bail!(ConfigError::invalid(
                "pagination",
                "max_per_page",
                format!("must be greater than 0, got {}", paging.max_per_page),
            ));
        }

        match ProviderRef::parse(&paging.provider) {
            Ok(Some(_)) => {}
            Ok(None) => bail!(ConfigError::invalid(
                "pagination",
                "provider",
                format!(
                    "`{}` must start with `data.`, `page.` or `filtered.`",
                    paging.provider
                ),
            )),
            Err(err) => bail!(ConfigError::Provider(err)),
        }

        if paging.generator.is_empty() {
            bail!(ConfigError::invalid("pagination", "generator", "must not be empty"));
        }

        if let PermalinkPattern::Custom(pattern) = &self.permalink.pattern
            && pattern.trim().is_empty()
        {
            bail!(ConfigError::invalid("permalink", "pattern", "must not be empty"));
        }

        if self.build.export.as_os_str().is_empty() {
            bail!(ConfigError::invalid("build", "export", "must not be empty"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
