use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{StoryError, StoryResult};
use crate::layout::block::BlockMetrics;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<TextBrushRgba8> for Rgba8 {
    fn from(b: TextBrushRgba8) -> Self {
        Rgba8::new(b.r, b.g, b.b, b.a)
    }
}

/// A registered font: family name for shaping plus glyph data for rasterizing.
#[derive(Clone)]
pub struct FontFace {
    family: String,
    pub(crate) data: vello_cpu::peniko::FontData,
}

impl FontFace {
    pub fn family(&self) -> &str {
        &self.family
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .finish()
    }
}

/// One shaped line of text and its pixel extent.
pub struct ShapedLine {
    pub(crate) layout: parley::Layout<TextBrushRgba8>,
    pub(crate) font_size: f32,
    size: Size,
}

impl ShapedLine {
    pub fn size(&self) -> Size {
        self.size
    }
}

/// Stacked lines with block geometry (centered lines, fixed inter-line spacing).
pub struct ShapedBlock {
    pub(crate) lines: Vec<ShapedLine>,
    metrics: BlockMetrics,
}

impl ShapedBlock {
    pub fn metrics(&self) -> &BlockMetrics {
        &self.metrics
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and resolve the family used for shaping.
    pub fn load_font(&mut self, font_bytes: Vec<u8>) -> StoryResult<FontFace> {
        if font_bytes.is_empty() {
            return Err(StoryError::font("font file is empty"));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| StoryError::font("no font families registered from font bytes"))?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StoryError::font("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(FontFace { family, data })
    }

    /// Shape a single unbroken line; `brush` is the fill color glyph runs carry.
    pub fn shape_line(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> StoryResult<ShapedLine> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StoryError::render("text size_px must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let size = Size::new(f64::from(layout.width()), f64::from(layout.height()));
        Ok(ShapedLine {
            layout,
            font_size: size_px,
            size,
        })
    }

    /// Shape pre-wrapped lines into a centered block.
    pub fn shape_block<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        face: &FontFace,
        size_px: f32,
        line_spacing: f64,
        brush: TextBrushRgba8,
    ) -> StoryResult<ShapedBlock> {
        let shaped = lines
            .iter()
            .map(|l| self.shape_line(l.as_ref(), face, size_px, brush))
            .collect::<StoryResult<Vec<_>>>()?;
        let metrics = BlockMetrics::new(shaped.iter().map(ShapedLine::size), line_spacing);
        Ok(ShapedBlock {
            lines: shaped,
            metrics,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/shaping.rs"]
mod tests;
