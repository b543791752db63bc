use core_types::{ItemId, MediaRef, Taxonomy};
use thiserror::Error;
use tracing::debug;

use crate::{CatalogItem, CatalogStore};

/// Rejections for caller-supplied input. State is left untouched whenever
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No catalog item with id {id}")]
    NotFound { id: String },

    #[error("Media index {index} is out of range for {len} media entries")]
    OutOfRange { index: isize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxState {
    Browsing,
    Viewing { item_id: ItemId, media_index: usize },
}

impl LightboxState {
    pub fn viewing(item_id: impl Into<ItemId>, media_index: usize) -> Self {
        Self::Viewing {
            item_id: item_id.into(),
            media_index,
        }
    }

    pub fn is_viewing(&self) -> bool {
        matches!(self, Self::Viewing { .. })
    }

    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            Self::Browsing => None,
            Self::Viewing { item_id, .. } => Some(item_id),
        }
    }

    pub fn media_index(&self) -> Option<usize> {
        match self {
            Self::Browsing => None,
            Self::Viewing { media_index, .. } => Some(*media_index),
        }
    }
}

/// Snapshot of everything the view needs to highlight the active filter and
/// draw the lightbox overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterAndLightboxState<C> {
    pub selected_category: C,
    pub lightbox: LightboxState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChip<C> {
    pub category: C,
    pub count: usize,
    pub selected: bool,
}

/// Read-only view of the open lightbox.
#[derive(Debug, Clone, Copy)]
pub struct LightboxView<'a, C> {
    pub item: &'a CatalogItem<C>,
    pub media_index: usize,
    pub media_count: usize,
    pub current_media: &'a MediaRef,
    /// Arrows and position dots only make sense with more than one image.
    pub has_navigation: bool,
}

impl<C> LightboxView<'_, C> {
    /// 1-based position for "2 / 3" style counters.
    pub fn position(&self) -> usize {
        self.media_index + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenItem {
    position: usize,
    media_index: usize,
}

/// Owns the selected category and the lightbox state for one browsing session.
///
/// Filtering and the lightbox are independent: changing the filter never
/// closes or moves the lightbox, and any catalog item may be opened whether or
/// not it is currently visible.
#[derive(Debug, Clone)]
pub struct FilterAndLightboxController<'a, C: Taxonomy> {
    store: &'a CatalogStore<C>,
    selected: C,
    open: Option<OpenItem>,
}

impl<'a, C: Taxonomy> FilterAndLightboxController<'a, C> {
    pub fn new(store: &'a CatalogStore<C>) -> Self {
        Self {
            store,
            selected: C::ALL,
            open: None,
        }
    }

    pub fn store(&self) -> &'a CatalogStore<C> {
        self.store
    }

    pub fn selected_category(&self) -> C {
        self.selected
    }

    pub fn select_category(&mut self, category: C) {
        debug!(from = %self.selected, to = %category, "filter changed");
        self.selected = category;
    }

    pub fn open_item(&mut self, id: &str) -> Result<(), NavigationError> {
        let Some(position) = self.store.position_of(id) else {
            debug!(item = id, "open rejected: unknown item");
            return Err(NavigationError::NotFound { id: id.to_string() });
        };

        self.open = Some(OpenItem {
            position,
            media_index: 0,
        });
        debug!(item = id, "lightbox opened");
        Ok(())
    }

    /// Closing an already closed lightbox is a no-op.
    pub fn close_item(&mut self) {
        if let Some(open) = self.open.take() {
            debug!(item = %self.store.all_items()[open.position].id, "lightbox closed");
        }
    }

    pub fn next_media(&mut self) {
        let store = self.store;
        let Some(open) = self.open.as_mut() else {
            return;
        };
        let len = store.all_items()[open.position].media.len();
        open.media_index = (open.media_index + 1) % len;
        debug!(index = open.media_index, len, "next media");
    }

    pub fn previous_media(&mut self) {
        let store = self.store;
        let Some(open) = self.open.as_mut() else {
            return;
        };
        let len = store.all_items()[open.position].media.len();
        open.media_index = (open.media_index + len - 1) % len;
        debug!(index = open.media_index, len, "previous media");
    }

    /// Jump straight to a media entry of the open item. Negative indices and
    /// indices past the end are rejected, as is any jump while browsing.
    pub fn jump_to_media(&mut self, index: isize) -> Result<(), NavigationError> {
        let store = self.store;
        let Some(open) = self.open.as_mut() else {
            debug!(index, "jump rejected: lightbox closed");
            return Err(NavigationError::OutOfRange { index, len: 0 });
        };

        let len = store.all_items()[open.position].media.len();
        match usize::try_from(index) {
            Ok(target) if target < len => {
                open.media_index = target;
                debug!(index = target, len, "jumped to media");
                Ok(())
            }
            _ => {
                debug!(index, len, "jump rejected: out of range");
                Err(NavigationError::OutOfRange { index, len })
            }
        }
    }

    pub fn lightbox(&self) -> LightboxState {
        match self.open {
            None => LightboxState::Browsing,
            Some(open) => LightboxState::Viewing {
                item_id: self.store.all_items()[open.position].id.clone(),
                media_index: open.media_index,
            },
        }
    }

    pub fn state(&self) -> FilterAndLightboxState<C> {
        FilterAndLightboxState {
            selected_category: self.selected,
            lightbox: self.lightbox(),
        }
    }

    /// Items matching the selected category, in catalog order.
    pub fn visible_items(&self) -> Vec<&'a CatalogItem<C>> {
        let store: &'a CatalogStore<C> = self.store;
        store.filter(self.selected).collect()
    }

    pub fn is_empty_view(&self) -> bool {
        self.store.filter(self.selected).next().is_none()
    }

    pub fn filter_chips(&self) -> Vec<FilterChip<C>> {
        self.store
            .categories_present()
            .iter()
            .map(|&category| FilterChip {
                category,
                count: self.store.count_for(category),
                selected: category == self.selected,
            })
            .collect()
    }

    pub fn open_item_ref(&self) -> Option<&'a CatalogItem<C>> {
        let store: &'a CatalogStore<C> = self.store;
        self.open.map(|open| &store.all_items()[open.position])
    }

    pub fn current_media(&self) -> Option<&'a MediaRef> {
        self.lightbox_view().map(|view| view.current_media)
    }

    pub fn lightbox_view(&self) -> Option<LightboxView<'a, C>> {
        let open = self.open?;
        let item = self.open_item_ref()?;
        let current_media = item.media.get(open.media_index)?;
        Some(LightboxView {
            item,
            media_index: open.media_index,
            media_count: item.media.len(),
            current_media,
            has_navigation: item.media.len() > 1,
        })
    }
}
