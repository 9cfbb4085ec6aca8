//! Conversion between `image::RgbaImage` and tiny-skia pixmaps
//!
//! Pixmaps hold premultiplied color while `RgbaImage` is straight alpha, so
//! every conversion goes through the per-pixel (de)multiply helpers.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use image::RgbaImage;
use tiny_skia::{ColorU8, Pixmap};

/// Copy an `RgbaImage` into a new premultiplied pixmap
pub fn pixmap_from_image(img: &RgbaImage) -> Result<Pixmap> {
    let (w, h) = (img.width(), img.height());
    let mut pixmap =
        Pixmap::new(w, h).ok_or_else(|| anyhow!("Cannot create {w}x{h} pixmap"))?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}

/// Copy a pixmap into a straight-alpha `RgbaImage`
pub fn image_from_pixmap(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
    }
    img
}

/// Decode an image file into a pixmap
pub fn load_pixmap(path: &Path) -> Result<Pixmap> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?
        .to_rgba8();
    pixmap_from_image(&img)
}

/// Encode a pixmap as PNG
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    image_from_pixmap(pixmap)
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))
}
