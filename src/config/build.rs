//! `[build]` section configuration.
//!
//! Contains the input manifest and output locations.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in sheaf.toml - input and output paths.
///
/// # Example
/// ```toml
/// [build]
/// manifest = "site.json"   # Sources and provider data
/// output = "public"        # Output directory
/// export = "pages.json"    # Export file name inside `output`
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Site manifest: sources and provider data.
    #[serde(default = "defaults::build::manifest")]
    #[educe(Default = defaults::build::manifest())]
    pub manifest: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// File name of the generated units export, relative to `output`.
    #[serde(default = "defaults::build::export")]
    #[educe(Default = defaults::build::export())]
    pub export: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.root, None);
        assert_eq!(config.build.manifest, PathBuf::from("site.json"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.export, PathBuf::from("pages.json"));
    }

    #[test]
    fn test_build_config_custom() {
        let config = r#"
            [build]
            manifest = "data/site.json"
            output = "dist"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.manifest, PathBuf::from("data/site.json"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [build]
            content = "content"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
