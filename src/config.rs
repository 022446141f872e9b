//! Immutable render configuration.
//!
//! [`StoryConfig`] carries every layout and style constant; [`StoryPaths`] carries the
//! filesystem locations. Both are built once at startup and passed by reference into the
//! pipeline.
use std::path::PathBuf;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{StoryError, StoryResult};
use crate::text::citation::BookNames;

/// Fixed remote location of the default font.
pub const DEFAULT_FONT_URL: &str =
    "https://github.com/google/fonts/raw/main/ofl/nanumgothic/NanumGothic-Bold.ttf";

#[derive(Clone, Debug, PartialEq)]
pub struct StoryConfig {
    pub canvas: Canvas,
    /// Verse font size in px.
    pub font_size: f32,
    /// Citation font is `font_size - citation_size_offset`.
    pub citation_size_offset: f32,
    /// Wrap width in characters.
    pub wrap_width: usize,
    /// Inter-line spacing as a fraction of `font_size` (truncated to whole px).
    pub line_spacing_ratio: f32,
    /// Verse block bottom edge, as a fraction of canvas height.
    pub base_y_ratio: f64,
    /// Gap between the verse baseline anchor and the citation top.
    pub citation_gap: f64,
    pub box_padding_x: f64,
    pub box_padding_y: f64,
    pub box_radius: f64,
    pub box_color: Rgba8,
    pub shadow_offset: f64,
    pub shadow_color: Rgba8,
    pub verse_color: Rgba8,
    pub citation_color: Rgba8,
    pub jpeg_quality: u8,
    pub book_names: BookNames,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::STORY,
            font_size: 52.0,
            citation_size_offset: 12.0,
            wrap_width: 18,
            line_spacing_ratio: 0.6,
            base_y_ratio: 0.62,
            citation_gap: 30.0,
            box_padding_x: 60.0,
            box_padding_y: 50.0,
            box_radius: 40.0,
            box_color: Rgba8::new(0, 0, 0, 140),
            shadow_offset: 2.0,
            shadow_color: Rgba8::opaque(0, 0, 0),
            verse_color: Rgba8::opaque(255, 255, 255),
            citation_color: Rgba8::opaque(230, 230, 230),
            jpeg_quality: 75,
            book_names: BookNames::default(),
        }
    }
}

impl StoryConfig {
    pub fn line_spacing(&self) -> f64 {
        f64::from((self.font_size * self.line_spacing_ratio).trunc())
    }

    pub fn citation_font_size(&self) -> f32 {
        self.font_size - self.citation_size_offset
    }

    pub fn validate(&self) -> StoryResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(StoryError::render("font_size must be finite and > 0"));
        }
        let citation = self.citation_font_size();
        if !citation.is_finite() || citation <= 0.0 {
            return Err(StoryError::render("citation font size must be > 0"));
        }
        if self.wrap_width == 0 {
            return Err(StoryError::render("wrap_width must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.base_y_ratio) {
            return Err(StoryError::render("base_y_ratio must be within [0, 1]"));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(StoryError::render("jpeg_quality must be within [1, 100]"));
        }
        Ok(())
    }
}

/// Filesystem inputs and output location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryPaths {
    pub corpus: PathBuf,
    pub background: PathBuf,
    pub font: PathBuf,
    pub output_dir: PathBuf,
    pub font_url: String,
}

impl Default for StoryPaths {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from("assets/bible_meditation_structured.json"),
            background: PathBuf::from("assets/background.png"),
            font: PathBuf::from("assets/NanumGothic-Bold.ttf"),
            output_dir: PathBuf::from("generated"),
            font_url: DEFAULT_FONT_URL.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
