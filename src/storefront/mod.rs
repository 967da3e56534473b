//! # Storefront Layout
//!
//! The three page variants share one catalog-and-cart core; what differs between them
//! is captured here as data. A [`Variant`] selects the product fixture and a default
//! [`StorefrontConfig`], and each page is an ordered list of [`Section`]s.

pub mod config;

pub use config::*;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The storefront page variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Three-watch catalog, every marketing section.
    #[default]
    Classic,
    /// Six-watch catalog with features, stock flags, discounts and a brand filter.
    Boutique,
    /// Classic catalog on a short landing page.
    Showcase,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::Boutique, Variant::Showcase];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Boutique => "boutique",
            Variant::Showcase => "showcase",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

/// A named block of the page, addressable by its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "home")]
    Hero,
    #[serde(rename = "catalog")]
    Catalog,
    #[serde(rename = "about")]
    About,
    #[serde(rename = "delivery")]
    Delivery,
    #[serde(rename = "warranty")]
    Warranty,
    #[serde(rename = "contacts")]
    Contacts,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Catalog,
        Section::About,
        Section::Delivery,
        Section::Warranty,
        Section::Contacts,
    ];

    /// The element id navigation scrolls to.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::Catalog => "catalog",
            Section::About => "about",
            Section::Delivery => "delivery",
            Section::Warranty => "warranty",
            Section::Contacts => "contacts",
        }
    }

    /// Navigation label.
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Главная",
            Section::Catalog => "Каталог",
            Section::About => "О бренде",
            Section::Delivery => "Доставка",
            Section::Warranty => "Гарантия",
            Section::Contacts => "Контакты",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("boutique".parse::<Variant>().unwrap(), Variant::Boutique);
        assert_eq!(" Showcase ".parse::<Variant>().unwrap(), Variant::Showcase);
        assert!(matches!(
            "deluxe".parse::<Variant>(),
            Err(ConfigError::UnknownVariant(ref v)) if v == "deluxe"
        ));
    }

    #[test]
    fn test_section_anchors_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("checkout"), None);
        assert_eq!(Section::Hero.anchor(), "home");
    }
}
