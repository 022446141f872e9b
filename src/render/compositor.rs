use kurbo::Shape;

use crate::assets::decode::PreparedImage;
use crate::config::StoryConfig;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, RoundedRect, Vec2};
use crate::foundation::error::{StoryError, StoryResult};
use crate::layout::story::StoryLayout;
use crate::render::composite::{FrameRgb8, flatten_to_rgb, over_in_place};
use crate::text::shaping::{FontFace, ShapedBlock};

/// Transparent drawing surface for the backdrop and text layers.
///
/// Draw calls accumulate in order; each one composites over what came before.
pub struct OverlayPainter {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl OverlayPainter {
    pub fn new(canvas: Canvas) -> StoryResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| StoryError::render("overlay width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| StoryError::render("overlay height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    pub fn fill_rounded_rect(&mut self, shape: RoundedRect, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu_color());
        self.ctx.fill_path(&bezpath_to_cpu(&shape.to_path(0.1)));
    }

    /// Fill every line of `block` with its top-left at `origin`, in the colors it was
    /// shaped with.
    pub fn fill_block(&mut self, block: &ShapedBlock, origin: Point, face: &FontFace) {
        self.draw_block(block, origin, face, None);
    }

    /// Fill `block` in a single `color` regardless of its brushes (used for shadows).
    pub fn fill_block_as(
        &mut self,
        block: &ShapedBlock,
        origin: Point,
        color: Rgba8,
        face: &FontFace,
    ) {
        self.draw_block(block, origin, face, Some(color));
    }

    fn draw_block(
        &mut self,
        block: &ShapedBlock,
        origin: Point,
        face: &FontFace,
        paint: Option<Rgba8>,
    ) {
        for (line, line_origin) in block.lines.iter().zip(block.metrics().line_origins()) {
            let at = origin + line_origin.to_vec2();
            self.ctx
                .set_transform(affine_to_cpu(Affine::translate(at.to_vec2())));
            for layout_line in line.layout.lines() {
                for item in layout_line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let color = paint.unwrap_or_else(|| run.style().brush.into());
                    self.ctx.set_paint(color.to_cpu_color());

                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    self.ctx
                        .glyph_run(&face.data)
                        .font_size(line.font_size)
                        .fill_glyphs(glyphs);
                }
            }
        }
    }

    /// Rasterize all queued draws into a premultiplied pixmap.
    pub fn finish(mut self) -> vello_cpu::Pixmap {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap
    }
}

/// Draw backdrop, then shadow and fill for the verse, then for the citation.
///
/// `verse` and `citation` are expected to be shaped with their fill colors as brushes.
pub fn paint_story_overlay(
    config: &StoryConfig,
    layout: &StoryLayout,
    verse: &ShapedBlock,
    citation: &ShapedBlock,
    face: &FontFace,
) -> StoryResult<vello_cpu::Pixmap> {
    let shadow = Vec2::new(config.shadow_offset, config.shadow_offset);
    let mut painter = OverlayPainter::new(config.canvas)?;

    painter.fill_rounded_rect(layout.backdrop_shape(), config.box_color);
    painter.fill_block_as(verse, layout.verse_origin() + shadow, config.shadow_color, face);
    painter.fill_block(verse, layout.verse_origin(), face);
    painter.fill_block_as(
        citation,
        layout.citation_origin() + shadow,
        config.shadow_color,
        face,
    );
    painter.fill_block(citation, layout.citation_origin(), face);

    Ok(painter.finish())
}

/// Composite `overlay` over the background and flatten to opaque RGB.
pub fn composite_story(
    background: &PreparedImage,
    overlay: &vello_cpu::Pixmap,
) -> StoryResult<FrameRgb8> {
    if u32::from(overlay.width()) != background.width
        || u32::from(overlay.height()) != background.height
    {
        return Err(StoryError::render(format!(
            "overlay {}x{} does not match background {}x{}",
            overlay.width(),
            overlay.height(),
            background.width,
            background.height
        )));
    }
    let mut out = background.rgba8_premul.clone();
    over_in_place(&mut out, overlay.data_as_u8_slice())?;
    flatten_to_rgb(background.width, background.height, &out)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
