//! `[permalink]` section configuration.

use super::defaults;
use crate::permalink::PermalinkPattern;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[permalink]` section in sheaf.toml.
///
/// # Example
/// ```toml
/// [permalink]
/// pattern = "pretty"   # none | pretty | ":year/:month/:title/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PermalinkConfig {
    /// Site-wide permalink pattern.
    #[serde(default = "defaults::permalink::pattern")]
    #[educe(Default = defaults::permalink::pattern())]
    pub pattern: PermalinkPattern,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use crate::permalink::PermalinkPattern;

    #[test]
    fn test_permalink_config_default() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.permalink.pattern, PermalinkPattern::None);
    }

    #[test]
    fn test_permalink_config_keywords_and_custom() {
        let config: SiteConfig = toml::from_str(
            r#"
            [permalink]
            pattern = "pretty"
        "#,
        )
        .unwrap();
        assert_eq!(config.permalink.pattern, PermalinkPattern::Pretty);

        let config: SiteConfig = toml::from_str(
            r#"
            [permalink]
            pattern = "blog/:year/:title/"
        "#,
        )
        .unwrap();
        assert_eq!(
            config.permalink.pattern,
            PermalinkPattern::Custom("blog/:year/:title/".into())
        );
    }
}
