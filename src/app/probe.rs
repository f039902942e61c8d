// SPDX-License-Identifier: MPL-2.0
//! Off-thread image probing.
//!
//! A source "loads" when its header decodes to valid dimensions. The
//! embedded fallback always loads.

use crate::gallery::FALLBACK_IMAGE_URL;
use std::path::PathBuf;

/// Whether `source` can be displayed.
pub async fn probe_image(source: String) -> bool {
    if source == FALLBACK_IMAGE_URL {
        return true;
    }
    let path = PathBuf::from(&source);
    match tokio::task::spawn_blocking(move || image_rs::image_dimensions(&path)).await {
        Ok(Ok((width, height))) => width > 0 && height > 0,
        Ok(Err(err)) => {
            tracing::debug!(%source, %err, "image probe failed");
            false
        }
        Err(err) => {
            tracing::warn!(%source, %err, "image probe task aborted");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn fallback_always_loads() {
        assert!(probe_image(FALLBACK_IMAGE_URL.to_string()).await);
    }

    #[tokio::test]
    async fn missing_file_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.png");
        assert!(!probe_image(path.to_string_lossy().into_owned()).await);
    }

    #[tokio::test]
    async fn corrupt_file_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").expect("failed to write");
        assert!(!probe_image(path.to_string_lossy().into_owned()).await);
    }

    #[tokio::test]
    async fn real_png_loads() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("pixel.png");
        image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("failed to write png");
        assert!(probe_image(path.to_string_lossy().into_owned()).await);
    }
}
