// SPDX-License-Identifier: MPL-2.0
//! Page catalog: the ordered, immutable list of images the viewer can show.
//!
//! A catalog is built once at startup, either from the built-in list or from
//! a TOML file, and handed to the viewer. Ids are 1-based and dense, so the
//! position of a page in the catalog is always `id - 1`.
//!
//! ```toml
//! [[page]]
//! id = 1
//! image = "magazine-front-cover"
//!
//! [[page]]
//! id = 2
//! image = "magazine-back-cover"
//! ```

pub mod assets;

pub use assets::{resolve_asset, Asset, AssetLibrary};

use crate::config::{DEFAULT_PAGE_ID, THUMBNAIL_PREFIX};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Stable, 1-based identifier of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(u32);

impl PageId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable image, with a full and a thumbnail representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    image_name: String,
}

impl Page {
    #[must_use]
    pub fn new(id: PageId, image_name: impl Into<String>) -> Self {
        Self {
            id,
            image_name: image_name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Identifier of the full-resolution asset.
    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Identifier of the thumbnail asset, derived from the image name.
    #[must_use]
    pub fn thumbnail_name(&self) -> String {
        format!("{THUMBNAIL_PREFIX}{}", self.image_name)
    }
}

/// Ordered, read-only sequence of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pages: Vec<Page>,
}

impl Catalog {
    /// Builds a catalog, checking that it is non-empty and that ids run
    /// 1, 2, 3, ... in order.
    pub fn new(pages: Vec<Page>) -> std::result::Result<Self, CatalogError> {
        if pages.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (position, page) in pages.iter().enumerate() {
            let expected = position as u32 + 1;
            if page.id.value() != expected {
                return Err(CatalogError::NonDenseId {
                    position,
                    expected,
                    found: page.id.value(),
                });
            }
        }

        Ok(Self { pages })
    }

    /// Builds a catalog from image names, numbering them from 1.
    pub fn from_names<I, S>(names: I) -> std::result::Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = names
            .into_iter()
            .zip(1u32..)
            .map(|(name, id)| Page::new(PageId::new(id), name))
            .collect();
        Self::new(pages)
    }

    /// The stock two-page magazine catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            pages: vec![
                Page::new(PageId::new(1), "magazine-front-cover"),
                Page::new(PageId::new(2), "magazine-back-cover"),
            ],
        }
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Looks a page up by id.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page> {
        let index = usize::try_from(id.value()).ok()?.checked_sub(1)?;
        self.pages.get(index)
    }

    #[must_use]
    pub fn contains(&self, id: PageId) -> bool {
        self.page(id).is_some()
    }

    /// Page shown at startup: id 2 when present, else the first page.
    #[must_use]
    pub fn default_page_id(&self) -> PageId {
        let preferred = PageId::new(DEFAULT_PAGE_ID);
        if self.contains(preferred) {
            preferred
        } else {
            self.pages[0].id
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    page: Vec<PageEntry>,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    id: u32,
    image: String,
}

/// Parses a catalog from TOML text.
pub fn parse(content: &str) -> Result<Catalog> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| CatalogError::Malformed(e.to_string()))?;
    let pages = file
        .page
        .into_iter()
        .map(|entry| Page::new(PageId::new(entry.id), entry.image))
        .collect();
    Ok(Catalog::new(pages)?)
}

/// Reads a catalog from a TOML file.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}
