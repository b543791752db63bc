pub mod seed;
pub mod services;
pub mod source;

use core_types::{CardSpan, ItemFlags, ItemId, MediaRef, Taxonomy};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

pub use services::{
    FilterAndLightboxController, FilterAndLightboxState, FilterChip, LightboxState, LightboxView,
    NavigationError,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Item {0} is tagged with the reserved \"All\" category")]
    ReservedCategory(ItemId),

    #[error("Item {0} has no media")]
    EmptyMedia(ItemId),

    #[error("Item {0} has an empty title")]
    EmptyTitle(ItemId),

    #[error("Duplicate item id {0}")]
    DuplicateId(ItemId),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// A project or furniture piece as authored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem<C> {
    pub id: ItemId,
    pub title: String,
    pub category: C,
    /// First entry is the cover image.
    pub media: Vec<MediaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default)]
    pub span: CardSpan,
    #[serde(default = "ItemFlags::empty", skip_serializing_if = "ItemFlags::is_empty")]
    pub flags: ItemFlags,
}

impl<C: Taxonomy> CatalogItem<C> {
    pub fn new<M>(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        category: C,
        media: impl IntoIterator<Item = M>,
    ) -> Self
    where
        M: Into<MediaRef>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            media: media.into_iter().map(Into::into).collect(),
            location: None,
            year: None,
            description: None,
            material: None,
            span: CardSpan::Normal,
            flags: ItemFlags::empty(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_span(mut self, span: CardSpan) -> Self {
        self.span = span;
        self
    }

    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn cover(&self) -> Option<&MediaRef> {
        self.media.first()
    }

    /// Number of images beyond the cover, shown as a "+N" badge on cards.
    pub fn extra_media_count(&self) -> usize {
        self.media.len().saturating_sub(1)
    }

    pub fn is_featured(&self) -> bool {
        self.flags.contains(ItemFlags::FEATURED)
    }

    pub fn is_showcased(&self) -> bool {
        self.flags.contains(ItemFlags::SHOWCASE)
    }

    fn validate(&self) -> Result<()> {
        if self.category.is_all() {
            return Err(CatalogError::ReservedCategory(self.id.clone()));
        }
        if self.media.is_empty() {
            return Err(CatalogError::EmptyMedia(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle(self.id.clone()));
        }
        Ok(())
    }
}

/// Immutable, validated catalog with category statistics computed up front.
#[derive(Debug, Clone)]
pub struct CatalogStore<C: Taxonomy> {
    items: Vec<CatalogItem<C>>,
    index: HashMap<ItemId, usize>,
    categories: Vec<C>,
    counts: HashMap<C, usize>,
}

impl<C: Taxonomy> CatalogStore<C> {
    /// Build a store, rejecting the whole catalog if any item breaks the
    /// item invariants or reuses an id.
    pub fn new(items: Vec<CatalogItem<C>>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        let mut categories = vec![C::ALL];
        let mut seen = HashSet::new();
        let mut counts: HashMap<C, usize> = HashMap::new();

        for (position, item) in items.iter().enumerate() {
            item.validate()?;
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if seen.insert(item.category) {
                categories.push(item.category);
            }
            *counts.entry(item.category).or_insert(0) += 1;
        }

        Ok(Self {
            items,
            index,
            categories,
            counts,
        })
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            categories: vec![C::ALL],
            counts: HashMap::new(),
        }
    }

    /// Every item in authored order.
    pub fn all_items(&self) -> &[CatalogItem<C>] {
        &self.items
    }

    /// `ALL` followed by the categories that actually occur, in first-seen order.
    pub fn categories_present(&self) -> &[C] {
        &self.categories
    }

    pub fn count_for(&self, category: C) -> usize {
        if category.is_all() {
            return self.items.len();
        }
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem<C>> {
        self.position_of(id).map(|position| &self.items[position])
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self, category: C) -> impl Iterator<Item = &CatalogItem<C>> + '_ {
        self.items
            .iter()
            .filter(move |item| category.is_all() || item.category == category)
    }

    pub fn featured(&self) -> Option<&CatalogItem<C>> {
        self.items.iter().find(|item| item.is_featured())
    }

    /// Showcased items in catalog order, without the featured lead item.
    pub fn showcase(&self) -> Vec<&CatalogItem<C>> {
        let featured = self.featured().map(|item| &item.id);
        self.items
            .iter()
            .filter(|item| item.is_showcased() && Some(&item.id) != featured)
            .collect()
    }
}

impl<C: Taxonomy> Default for CatalogStore<C> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Category;

    fn sample_items() -> Vec<CatalogItem<Category>> {
        vec![
            CatalogItem::new("A", "Meridian", Category::Residential, ["a1.jpg", "a2.jpg"]),
            CatalogItem::new("B", "Arbor Hub", Category::Commercial, ["b1.jpg"]),
            CatalogItem::new("C", "Skyline", Category::Residential, ["c1.jpg"]),
            CatalogItem::new("D", "Haveli", Category::Renovation, ["d1.jpg"]),
        ]
    }

    #[test]
    fn categories_present_in_first_seen_order() {
        let store = CatalogStore::new(sample_items()).unwrap();
        assert_eq!(
            store.categories_present(),
            &[
                Category::All,
                Category::Residential,
                Category::Commercial,
                Category::Renovation
            ]
        );
        assert!(!store.categories_present().contains(&Category::Turnkey));
    }

    #[test]
    fn counts_per_category() {
        let store = CatalogStore::new(sample_items()).unwrap();
        assert_eq!(store.count_for(Category::All), 4);
        assert_eq!(store.count_for(Category::Residential), 2);
        assert_eq!(store.count_for(Category::Commercial), 1);
        assert_eq!(store.count_for(Category::Turnkey), 0);
    }

    #[test]
    fn empty_catalog_is_tolerated() {
        let store = CatalogStore::<Category>::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.categories_present(), &[Category::All]);
        assert_eq!(store.count_for(Category::All), 0);
        assert_eq!(store.filter(Category::Residential).count(), 0);
        assert!(store.featured().is_none());
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let store = CatalogStore::new(sample_items()).unwrap();
        let ids: Vec<&str> = store
            .filter(Category::Residential)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "C"]);

        let all: Vec<&str> = store.filter(Category::All).map(|i| i.id.as_str()).collect();
        assert_eq!(all, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn lookup_by_id() {
        let store = CatalogStore::new(sample_items()).unwrap();
        assert_eq!(store.position_of("C"), Some(2));
        assert_eq!(store.get("B").map(|i| i.title.as_str()), Some("Arbor Hub"));
        assert!(store.get("Z").is_none());
    }

    #[test]
    fn rejects_invalid_items() {
        let mut items = sample_items();
        items.push(CatalogItem::new("E", "Nothing", Category::All, ["e.jpg"]));
        assert!(matches!(
            CatalogStore::new(items),
            Err(CatalogError::ReservedCategory(id)) if id.as_str() == "E"
        ));

        let mut items = sample_items();
        items.push(CatalogItem::new(
            "E",
            "No media",
            Category::Turnkey,
            Vec::<&str>::new(),
        ));
        assert!(matches!(CatalogStore::new(items), Err(CatalogError::EmptyMedia(_))));

        let mut items = sample_items();
        items.push(CatalogItem::new("E", "  ", Category::Turnkey, ["e.jpg"]));
        assert!(matches!(CatalogStore::new(items), Err(CatalogError::EmptyTitle(_))));

        let mut items = sample_items();
        items.push(CatalogItem::new("A", "Again", Category::Turnkey, ["e.jpg"]));
        assert!(matches!(
            CatalogStore::new(items),
            Err(CatalogError::DuplicateId(id)) if id.as_str() == "A"
        ));
    }

    #[test]
    fn featured_and_showcase() {
        let mut items = sample_items();
        items[0].flags = ItemFlags::FEATURED | ItemFlags::SHOWCASE;
        items[1].flags = ItemFlags::SHOWCASE;
        items[3].flags = ItemFlags::SHOWCASE;
        let store = CatalogStore::new(items).unwrap();

        assert_eq!(store.featured().map(|i| i.id.as_str()), Some("A"));
        let strip: Vec<&str> = store.showcase().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(strip, vec!["B", "D"]);
    }

    #[test]
    fn item_helpers() {
        let item = CatalogItem::new("A", "Meridian", Category::Residential, ["a1.jpg", "a2.jpg", "a3.jpg"])
            .with_location("Ahmedabad, Gujarat")
            .with_year("2024")
            .with_span(CardSpan::Tall);
        assert_eq!(item.cover().map(|m| m.as_str()), Some("a1.jpg"));
        assert_eq!(item.extra_media_count(), 2);
        assert_eq!(item.span, CardSpan::Tall);
        assert!(!item.is_featured());
    }
}
