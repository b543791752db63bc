//! Closed category sets used to tag catalog items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// A fixed enumeration of item categories with an `ALL` sentinel that
/// stands for "no filter" and is never assigned to an item.
pub trait Taxonomy:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const ALL: Self;

    /// Every variant in authored order, starting with `ALL`.
    fn variants() -> &'static [Self];

    fn label(self) -> &'static str;

    fn slug(self) -> &'static str;

    fn is_all(self) -> bool {
        self == Self::ALL
    }

    /// Case-insensitive lookup by label or slug.
    fn parse(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::variants().iter().copied().find(|variant| {
            variant.label().eq_ignore_ascii_case(needle)
                || variant.slug().eq_ignore_ascii_case(needle)
        })
    }
}

/// Portfolio project categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "all")]
    All,
    #[serde(alias = "residential")]
    Residential,
    #[serde(alias = "commercial")]
    Commercial,
    #[serde(alias = "turnkey")]
    Turnkey,
    #[serde(rename = "Bespoke Furniture", alias = "bespoke-furniture")]
    BespokeFurniture,
    #[serde(alias = "renovation")]
    Renovation,
    #[serde(rename = "Facade & Exterior", alias = "facade-exterior")]
    FacadeExterior,
    #[serde(rename = "Architecture & Planning", alias = "architecture-planning")]
    ArchitecturePlanning,
}

impl Taxonomy for Category {
    const ALL: Self = Category::All;

    fn variants() -> &'static [Self] {
        &[
            Category::All,
            Category::Residential,
            Category::Commercial,
            Category::Turnkey,
            Category::BespokeFurniture,
            Category::Renovation,
            Category::FacadeExterior,
            Category::ArchitecturePlanning,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Residential => "Residential",
            Category::Commercial => "Commercial",
            Category::Turnkey => "Turnkey",
            Category::BespokeFurniture => "Bespoke Furniture",
            Category::Renovation => "Renovation",
            Category::FacadeExterior => "Facade & Exterior",
            Category::ArchitecturePlanning => "Architecture & Planning",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Residential => "residential",
            Category::Commercial => "commercial",
            Category::Turnkey => "turnkey",
            Category::BespokeFurniture => "bespoke-furniture",
            Category::Renovation => "renovation",
            Category::FacadeExterior => "facade-exterior",
            Category::ArchitecturePlanning => "architecture-planning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Bespoke furniture catalogue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FurnitureCategory {
    #[serde(alias = "all")]
    All,
    #[serde(rename = "Beds & Headboards", alias = "beds-headboards")]
    BedsHeadboards,
    #[serde(rename = "Sofas & Seating", alias = "sofas-seating")]
    SofasSeating,
    #[serde(rename = "Dining Tables", alias = "dining-tables")]
    DiningTables,
    #[serde(rename = "Storage & Wardrobes", alias = "storage-wardrobes")]
    StorageWardrobes,
    #[serde(rename = "Kitchen & Joinery", alias = "kitchen-joinery")]
    KitchenJoinery,
    #[serde(rename = "Office & Study", alias = "office-study")]
    OfficeStudy,
}

impl Taxonomy for FurnitureCategory {
    const ALL: Self = FurnitureCategory::All;

    fn variants() -> &'static [Self] {
        &[
            FurnitureCategory::All,
            FurnitureCategory::BedsHeadboards,
            FurnitureCategory::SofasSeating,
            FurnitureCategory::DiningTables,
            FurnitureCategory::StorageWardrobes,
            FurnitureCategory::KitchenJoinery,
            FurnitureCategory::OfficeStudy,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            FurnitureCategory::All => "All",
            FurnitureCategory::BedsHeadboards => "Beds & Headboards",
            FurnitureCategory::SofasSeating => "Sofas & Seating",
            FurnitureCategory::DiningTables => "Dining Tables",
            FurnitureCategory::StorageWardrobes => "Storage & Wardrobes",
            FurnitureCategory::KitchenJoinery => "Kitchen & Joinery",
            FurnitureCategory::OfficeStudy => "Office & Study",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            FurnitureCategory::All => "all",
            FurnitureCategory::BedsHeadboards => "beds-headboards",
            FurnitureCategory::SofasSeating => "sofas-seating",
            FurnitureCategory::DiningTables => "dining-tables",
            FurnitureCategory::StorageWardrobes => "storage-wardrobes",
            FurnitureCategory::KitchenJoinery => "kitchen-joinery",
            FurnitureCategory::OfficeStudy => "office-study",
        }
    }
}

impl fmt::Display for FurnitureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FurnitureCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_slugs() {
        assert_eq!("Facade & Exterior".parse::<Category>(), Ok(Category::FacadeExterior));
        assert_eq!("facade-exterior".parse::<Category>(), Ok(Category::FacadeExterior));
        assert_eq!(" RESIDENTIAL ".parse::<Category>(), Ok(Category::Residential));
        assert_eq!(
            "dining-tables".parse::<FurnitureCategory>(),
            Ok(FurnitureCategory::DiningTables)
        );
        assert_eq!(
            "landscaping".parse::<Category>(),
            Err(UnknownCategory("landscaping".into()))
        );
    }

    #[test]
    fn all_is_first_and_sentinel() {
        assert_eq!(Category::variants()[0], Category::ALL);
        assert_eq!(FurnitureCategory::variants()[0], FurnitureCategory::ALL);
        assert!(Category::All.is_all());
        assert!(!Category::Turnkey.is_all());
    }

    #[test]
    fn serde_uses_labels_and_accepts_slugs() {
        let json = serde_json::to_string(&Category::ArchitecturePlanning).unwrap();
        assert_eq!(json, "\"Architecture & Planning\"");

        let parsed: Category = serde_json::from_str("\"bespoke-furniture\"").unwrap();
        assert_eq!(parsed, Category::BespokeFurniture);

        let parsed: FurnitureCategory = serde_json::from_str("\"Sofas & Seating\"").unwrap();
        assert_eq!(parsed, FurnitureCategory::SofasSeating);
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for variant in Category::variants() {
            assert_eq!(Category::parse(variant.label()), Some(*variant));
        }
        for variant in FurnitureCategory::variants() {
            assert_eq!(FurnitureCategory::parse(variant.slug()), Some(*variant));
        }
    }
}
