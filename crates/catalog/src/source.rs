//! JSON catalog documents.
//!
//! A document is `{ "items": [...] }`. Categories may be written as labels
//! (`"Facade & Exterior"`) or slugs (`"facade-exterior"`), and every field
//! other than `id`, `title`, `category` and `media` may be omitted.

use core_types::Taxonomy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::{CatalogItem, CatalogStore, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument<C> {
    pub items: Vec<CatalogItem<C>>,
}

#[derive(Serialize)]
struct DocumentRef<'a, C> {
    items: &'a [CatalogItem<C>],
}

pub fn from_json_str<C>(payload: &str) -> Result<CatalogStore<C>>
where
    C: Taxonomy + DeserializeOwned,
{
    let document: CatalogDocument<C> = serde_json::from_str(payload)?;
    CatalogStore::new(document.items)
}

pub fn load_json<C>(path: impl AsRef<Path>) -> Result<CatalogStore<C>>
where
    C: Taxonomy + DeserializeOwned,
{
    let path = path.as_ref();
    let payload = fs::read_to_string(path)?;
    let store = from_json_str(&payload)?;
    info!(path = %path.display(), items = store.len(), "loaded catalog");
    Ok(store)
}

pub fn to_json_string<C>(store: &CatalogStore<C>) -> Result<String>
where
    C: Taxonomy + Serialize,
{
    let document = DocumentRef {
        items: store.all_items(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
