use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;

use crate::foundation::error::{StoryError, StoryResult};
use crate::render::composite::FrameRgb8;

/// `story_<YYYYMMDD_HHMMSS>.jpg`, second resolution.
pub fn story_file_name(timestamp: NaiveDateTime) -> String {
    format!("story_{}.jpg", timestamp.format("%Y%m%d_%H%M%S"))
}

pub fn encode_jpeg<W: Write>(frame: &FrameRgb8, quality: u8, out: W) -> StoryResult<()> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(3);
    if frame.width == 0 || frame.height == 0 || frame.data.len() != expected {
        return Err(StoryError::render(format!(
            "frame {}x{} has {} bytes, expected {expected}",
            frame.width,
            frame.height,
            frame.data.len()
        )));
    }
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(out, quality);
    encoder
        .encode(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .context("encode jpeg")?;
    Ok(())
}

/// Write `frame` into `output_dir` under its timestamped name and return the path.
///
/// The image is fully encoded before anything touches the output directory, then written
/// beside the target and renamed into place. Two saves within the same second share a
/// name; the later one overwrites the earlier.
pub fn save_story(
    frame: &FrameRgb8,
    output_dir: &Path,
    timestamp: NaiveDateTime,
    quality: u8,
) -> StoryResult<PathBuf> {
    let mut jpeg = Vec::new();
    encode_jpeg(frame, quality, &mut jpeg)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir '{}'", output_dir.display()))?;
    let path = output_dir.join(story_file_name(timestamp));
    let partial = path.with_extension("jpg.part");
    std::fs::write(&partial, &jpeg)
        .with_context(|| format!("write output '{}'", partial.display()))?;
    std::fs::rename(&partial, &path)
        .with_context(|| format!("move output into '{}'", path.display()))?;
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
