// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for building a gallery from image files.
//!
//! Scans a directory for supported image formats, sorts them according to
//! the configured sort order, and turns them into gallery markup.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use crate::gallery::{GalleryMarkup, NodeAllocator};
use std::path::{Path, PathBuf};

/// Lowercase file extensions the gallery can decode.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "ico", "tif", "tiff",
];

/// One image found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub path: PathBuf,
    /// File name shown as the slide's alt text.
    pub label: String,
}

impl GalleryEntry {
    fn from_path(path: PathBuf) -> Self {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, label }
    }

    /// Source string handed to the gallery.
    #[must_use]
    pub fn source(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Scans `directory` for supported images, sorted by `sort_order`.
///
/// Returns an error if `directory` is not a readable directory.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<GalleryEntry>> {
    if !directory.is_dir() {
        return Err(Error::Scan(format!(
            "{} is not a directory",
            directory.display()
        )));
    }

    let mut image_files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);
    tracing::debug!(
        directory = %directory.display(),
        count = image_files.len(),
        "scanned gallery directory"
    );

    Ok(image_files.into_iter().map(GalleryEntry::from_path).collect())
}

/// Builds full gallery markup for `entries`.
pub fn build_markup(nodes: &mut NodeAllocator, entries: &[GalleryEntry]) -> GalleryMarkup {
    let sources: Vec<(String, &str)> = entries
        .iter()
        .map(|entry| (entry.source(), entry.label.as_str()))
        .collect();
    let borrowed: Vec<(&str, &str)> = sources
        .iter()
        .map(|(source, label)| (source.as_str(), *label))
        .collect();
    GalleryMarkup::standard(nodes, &borrowed)
}

/// Whether `path` carries a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}
