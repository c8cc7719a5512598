// SPDX-License-Identifier: MPL-2.0
//! Resolution of page image names to files on disk.
//!
//! Only the header of each file is read, to learn its pixel size; decoding
//! is left to the renderer.

use super::Catalog;
use crate::config::ASSET_EXTENSIONS;
use iced::widget::image;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An image file found for a page, with its intrinsic size.
#[derive(Debug, Clone)]
pub struct Asset {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub handle: image::Handle,
}

impl Asset {
    /// Width over height, or 1.0 for a degenerate image.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Finds the file for `name` inside `dir`.
///
/// `name` may already carry an extension; otherwise each supported
/// extension is tried in order. Unreadable files are skipped.
#[must_use]
pub fn resolve_asset(dir: &Path, name: &str) -> Option<Asset> {
    let exact = std::iter::once(dir.join(name));
    let with_extensions = ASSET_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")));

    exact
        .chain(with_extensions)
        .filter(|candidate| candidate.is_file())
        .find_map(|candidate| match image_rs::image_dimensions(&candidate) {
            Ok((width, height)) => Some(Asset {
                handle: image::Handle::from_path(&candidate),
                path: candidate,
                width,
                height,
            }),
            Err(error) => {
                log::warn!("Skipping unreadable image {}: {}", candidate.display(), error);
                None
            }
        })
}

/// Every image and thumbnail of a catalog, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    assets: HashMap<String, Asset>,
}

impl AssetLibrary {
    /// Resolves the full image and the thumbnail of each page in `dir`.
    ///
    /// Missing files are logged and left out; the UI shows a placeholder
    /// for them.
    #[must_use]
    pub fn load(dir: Option<&Path>, catalog: &Catalog) -> Self {
        let Some(dir) = dir else {
            log::warn!("No assets directory available; pages will show placeholders");
            return Self::default();
        };

        let mut assets = HashMap::new();
        for page in catalog.pages() {
            for name in [page.image_name().to_string(), page.thumbnail_name()] {
                match resolve_asset(dir, &name) {
                    Some(asset) => {
                        assets.insert(name, asset);
                    }
                    None => log::warn!("No image found for '{}' in {}", name, dir.display()),
                }
            }
        }

        log::info!("Resolved {} page asset(s) in {}", assets.len(), dir.display());
        Self { assets }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        image_rs::RgbaImage::new(width, height)
            .save(path)
            .expect("failed to write test image");
    }

    #[test]
    fn resolves_name_with_supported_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(&dir.path().join("cover.png"), 40, 20);

        let asset = resolve_asset(dir.path(), "cover").expect("asset found");
        assert_eq!((asset.width, asset.height), (40, 20));
        assert_eq!(asset.path, dir.path().join("cover.png"));
        assert_eq!(asset.aspect_ratio(), 2.0);
    }

    #[test]
    fn resolves_name_that_already_has_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(&dir.path().join("cover.png"), 8, 8);

        assert!(resolve_asset(dir.path(), "cover.png").is_some());
    }

    #[test]
    fn missing_asset_is_none() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(resolve_asset(dir.path(), "nowhere").is_none());
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("broken.png"), b"not an image").expect("write file");

        assert!(resolve_asset(dir.path(), "broken").is_none());
    }

    #[test]
    fn thumbnail_and_full_image_resolve_independently() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(&dir.path().join("cover.png"), 100, 50);
        write_png(&dir.path().join("thumb-cover.png"), 10, 5);

        let full = resolve_asset(dir.path(), "cover").expect("full image");
        let thumb = resolve_asset(dir.path(), "thumb-cover").expect("thumbnail");
        assert_eq!(full.width, 100);
        assert_eq!(thumb.width, 10);
    }

    #[test]
    fn library_resolves_images_and_thumbnails_of_every_page() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(&dir.path().join("front.png"), 30, 40);
        write_png(&dir.path().join("thumb-front.png"), 3, 4);
        write_png(&dir.path().join("back.png"), 30, 40);

        let catalog = Catalog::from_names(["front", "back"]).expect("valid catalog");
        let library = AssetLibrary::load(Some(dir.path()), &catalog);

        assert_eq!(library.len(), 3);
        assert!(library.get("front").is_some());
        assert!(library.get("thumb-front").is_some());
        assert!(library.get("back").is_some());
        assert!(library.get("thumb-back").is_none());
    }

    #[test]
    fn library_without_directory_is_empty() {
        let library = AssetLibrary::load(None, &Catalog::builtin());
        assert!(library.is_empty());
    }
}
