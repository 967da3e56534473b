//! # Storefront Configuration
//!
//! [`StorefrontConfig`] replaces three copies of the page with one parameterised core.
//! It can be built in code with [`StorefrontConfig::builder`], loaded from JSON, or
//! picked from the environment:
//!
//! | Variable            | Meaning                                   |
//! |---------------------|-------------------------------------------|
//! | `TIMEPIECE_CONFIG`  | Path to a JSON config file                |
//! | `TIMEPIECE_VARIANT` | `classic`, `boutique` or `showcase`       |
//!
//! A JSON file only needs the fields it wants to change; everything else comes from
//! the defaults of its variant:
//!
//! ```json
//! { "variant": "boutique", "pricing": "discounted" }
//! ```

use crate::model::PricingPolicy;
use crate::storefront::{Section, Variant};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "TIMEPIECE_CONFIG";
pub const VARIANT_VAR: &str = "TIMEPIECE_VARIANT";

const DEFAULT_SESSION_BUFFER: usize = 32;

/// Errors raised while building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown storefront variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Everything that distinguishes one storefront page from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub variant: Variant,
    /// Page sections in display order.
    pub sections: Vec<Section>,
    /// Whether the catalog shows brand filter buttons.
    pub brand_filter: bool,
    pub pricing: PricingPolicy,
    /// Capacity of the cart session request channel.
    pub session_buffer: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl StorefrontConfig {
    /// The stock layout of a variant.
    pub fn for_variant(variant: Variant) -> Self {
        let sections = match variant {
            Variant::Classic | Variant::Boutique => Section::ALL.to_vec(),
            Variant::Showcase => vec![Section::Hero, Section::Catalog, Section::Contacts],
        };
        Self {
            variant,
            sections,
            brand_filter: variant == Variant::Boutique,
            pricing: PricingPolicy::default(),
            session_buffer: DEFAULT_SESSION_BUFFER,
        }
    }

    pub fn builder(variant: Variant) -> StorefrontConfigBuilder {
        StorefrontConfigBuilder {
            config: Self::for_variant(variant),
        }
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        file.resolve()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ConfigFile::read(path.as_ref())?.resolve()
    }

    /// Reads `TIMEPIECE_CONFIG` and `TIMEPIECE_VARIANT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StorefrontConfig::from_env`] with an injectable variable lookup.
    ///
    /// The variant from the environment replaces the file's `variant` before the
    /// variant defaults are applied, so fields the file leaves out follow the
    /// overriding variant. Fields the file sets explicitly still win.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let variant = lookup(VARIANT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.parse::<Variant>())
            .transpose()?;

        match lookup(CONFIG_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            Some(path) => {
                let mut file = ConfigFile::read(Path::new(&path))?;
                if variant.is_some() {
                    file.variant = variant;
                }
                file.resolve()
            }
            None => Ok(Self::for_variant(variant.unwrap_or_default())),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.session_buffer == 0 {
            return Err(ConfigError::Invalid("session_buffer must be at least 1".into()));
        }
        Ok(self)
    }
}

/// Fluent builder starting from a variant's defaults.
#[derive(Debug, Clone)]
pub struct StorefrontConfigBuilder {
    config: StorefrontConfig,
}

impl StorefrontConfigBuilder {
    pub fn sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.config.sections = sections.into_iter().collect();
        self
    }

    pub fn brand_filter(mut self, enabled: bool) -> Self {
        self.config.brand_filter = enabled;
        self
    }

    pub fn pricing(mut self, pricing: PricingPolicy) -> Self {
        self.config.pricing = pricing;
        self
    }

    pub fn session_buffer(mut self, size: usize) -> Self {
        self.config.session_buffer = size;
        self
    }

    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        self.config.validate()
    }
}

/// On-disk shape: every field optional, unknown fields rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    variant: Option<Variant>,
    sections: Option<Vec<Section>>,
    brand_filter: Option<bool>,
    pricing: Option<PricingPolicy>,
    session_buffer: Option<usize>,
}

impl ConfigFile {
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded storefront config");
        Ok(serde_json::from_str(&json)?)
    }

    fn resolve(self) -> Result<StorefrontConfig, ConfigError> {
        let mut builder = StorefrontConfig::builder(self.variant.unwrap_or_default());
        if let Some(sections) = self.sections {
            builder = builder.sections(sections);
        }
        if let Some(enabled) = self.brand_filter {
            builder = builder.brand_filter(enabled);
        }
        if let Some(pricing) = self.pricing {
            builder = builder.pricing(pricing);
        }
        if let Some(size) = self.session_buffer {
            builder = builder.session_buffer(size);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_variant_defaults() {
        let classic = StorefrontConfig::for_variant(Variant::Classic);
        assert_eq!(classic.sections.len(), 6);
        assert!(!classic.brand_filter);
        assert_eq!(classic.pricing, PricingPolicy::ListPrice);

        let boutique = StorefrontConfig::for_variant(Variant::Boutique);
        assert!(boutique.brand_filter);

        let showcase = StorefrontConfig::for_variant(Variant::Showcase);
        assert!(showcase.has_section(Section::Catalog));
        assert!(!showcase.has_section(Section::Warranty));
    }

    #[test]
    fn test_builder_overrides() {
        let config = StorefrontConfig::builder(Variant::Classic)
            .sections([Section::Catalog, Section::Contacts])
            .brand_filter(true)
            .pricing(PricingPolicy::Discounted)
            .session_buffer(4)
            .build()
            .unwrap();

        assert_eq!(config.sections, vec![Section::Catalog, Section::Contacts]);
        assert!(config.brand_filter);
        assert_eq!(config.pricing, PricingPolicy::Discounted);
        assert_eq!(config.session_buffer, 4);
    }

    #[test]
    fn test_builder_rejects_zero_buffer() {
        let result = StorefrontConfig::builder(Variant::Classic).session_buffer(0).build();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_json_uses_variant_defaults() {
        let config =
            StorefrontConfig::from_json_str(r#"{ "variant": "boutique", "pricing": "discounted" }"#)
                .unwrap();
        assert_eq!(config.variant, Variant::Boutique);
        assert!(config.brand_filter);
        assert_eq!(config.pricing, PricingPolicy::Discounted);
        assert_eq!(config.sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_json_sections_use_anchor_names() {
        let config =
            StorefrontConfig::from_json_str(r#"{ "sections": ["home", "contacts"] }"#).unwrap();
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.sections, vec![Section::Hero, Section::Contacts]);
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let result = StorefrontConfig::from_json_str(r#"{ "checkout": true }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_lookup_variant_only() {
        let vars = HashMap::from([(VARIANT_VAR, "showcase")]);
        let config =
            StorefrontConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config, StorefrontConfig::for_variant(Variant::Showcase));
    }

    #[test]
    fn test_lookup_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_lookup_bad_variant() {
        let result = StorefrontConfig::from_lookup(|key| {
            (key == VARIANT_VAR).then(|| "grand".to_string())
        });
        assert!(matches!(result, Err(ConfigError::UnknownVariant(_))));
    }

    #[test]
    fn test_lookup_missing_file() {
        let result = StorefrontConfig::from_lookup(|key| {
            (key == CONFIG_PATH_VAR).then(|| "/nonexistent/timepiece.json".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    fn write_config(name: &str, json: &str) -> std::path::PathBuf {
        let file_name = format!("timepiece_{}_{name}.json", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_lookup_file_without_override() {
        let path = write_config("plain", r#"{ "pricing": "discounted" }"#);
        let path_str = path.display().to_string();

        let config = StorefrontConfig::from_lookup(|key| {
            (key == CONFIG_PATH_VAR).then(|| path_str.clone())
        })
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.variant, Variant::Classic);
        assert!(!config.brand_filter);
        assert_eq!(config.sections, Section::ALL.to_vec());
        assert_eq!(config.pricing, PricingPolicy::Discounted);
    }

    #[test]
    fn test_lookup_variant_overrides_file_defaults() {
        let path = write_config("override", r#"{ "pricing": "discounted" }"#);
        let vars = HashMap::from([
            (CONFIG_PATH_VAR, path.display().to_string()),
            (VARIANT_VAR, "boutique".to_string()),
        ]);

        let config = StorefrontConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.variant, Variant::Boutique);
        assert!(config.brand_filter);
        assert_eq!(config.sections, Section::ALL.to_vec());
        assert_eq!(config.pricing, PricingPolicy::Discounted);
        assert_eq!(config.session_buffer, DEFAULT_SESSION_BUFFER);
    }

    #[test]
    fn test_lookup_explicit_file_fields_beat_override() {
        let path = write_config(
            "explicit",
            r#"{ "variant": "classic", "brand_filter": false, "sections": ["home", "catalog"] }"#,
        );
        let vars = HashMap::from([
            (CONFIG_PATH_VAR, path.display().to_string()),
            (VARIANT_VAR, "Boutique".to_string()),
        ]);

        let config = StorefrontConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.variant, Variant::Boutique);
        assert!(!config.brand_filter);
        assert_eq!(config.sections, vec![Section::Hero, Section::Catalog]);
    }
}
