//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sheaf pagination engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: sheaf.toml)
    #[arg(short = 'C', long, default_value = "sheaf.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Paginate every opted-in source and export the generated units
    Build {
        /// Site manifest path (relative to project root)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Output directory path (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the default page size
        #[arg(long = "max-per-page")]
        max_per_page: Option<i64>,

        /// Print the export to stdout instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Validate the config and manifest without writing anything
    Check,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
    pub const fn to_stdout(&self) -> bool {
        matches!(self.command, Commands::Build { stdout: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_args() {
        let cli = Cli::try_parse_from([
            "sheaf",
            "--root",
            "site",
            "build",
            "--max-per-page",
            "5",
            "--stdout",
        ])
        .unwrap();

        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, PathBuf::from("sheaf.toml"));
        assert!(cli.is_build());
        assert!(cli.to_stdout());
        assert!(matches!(
            cli.command,
            Commands::Build { max_per_page: Some(5), .. }
        ));
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["sheaf", "-C", "other.toml", "check"]).unwrap();
        assert!(cli.is_check());
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }
}
