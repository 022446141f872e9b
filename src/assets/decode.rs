use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::StoryResult;
use crate::foundation::math::premultiply_rgba8_in_place;

#[derive(Clone, Debug)]
/// Raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

/// Decode encoded image bytes and stretch them to exactly fill `canvas`.
pub fn decode_background(bytes: &[u8], canvas: Canvas) -> StoryResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode background image")?;
    let resized = dyn_img.resize_exact(
        canvas.width,
        canvas.height,
        image::imageops::FilterType::CatmullRom,
    );
    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul,
    })
}

#[tracing::instrument]
pub fn load_background(path: &Path, canvas: Canvas) -> StoryResult<PreparedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read background '{}'", path.display()))?;
    decode_background(&bytes, canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
