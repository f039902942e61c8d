// SPDX-License-Identifier: MPL-2.0
//! Placeholder artwork for images that fail to load.
//!
//! The SVG is embedded and rasterized at runtime, both for the fallback
//! slide and for the window icon.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::window::{icon, Icon};
use resvg::usvg;

const FALLBACK_SVG: &str = include_str!("../assets/fallback.svg");

/// Width of the rasterized fallback slide.
pub const FALLBACK_WIDTH: u32 = 800;

const ICON_SIZE: u32 = 128;

/// An RGBA raster of the fallback artwork.
#[derive(Debug, Clone)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Rasterizes the fallback SVG into a `width`-wide buffer, keeping aspect.
pub fn rasterize(width: u32) -> Result<Raster> {
    let tree = usvg::Tree::from_data(FALLBACK_SVG.as_bytes(), &usvg::Options::default())
        .map_err(|err| Error::Svg(err.to_string()))?;

    let size = tree.size();
    let scale = width as f32 / size.width();
    let height = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg(format!("invalid raster size {width}x{height}")))?;
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(Raster {
        width,
        height,
        pixels: pixmap.take(),
    })
}

/// Image handle shown in place of a broken slide.
pub fn fallback_handle() -> Result<image::Handle> {
    let raster = rasterize(FALLBACK_WIDTH)?;
    Ok(image::Handle::from_rgba(
        raster.width,
        raster.height,
        raster.pixels,
    ))
}

/// Window icon rendered from the same artwork. `None` if rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let raster = rasterize(ICON_SIZE).ok()?;
    icon::from_rgba(raster.pixels, raster.width, raster.height).ok()
}
