use crate::config::StoryConfig;
use crate::foundation::core::{Point, Rect, RoundedRect, Size};

/// Placement of every element on the story canvas, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoryLayout {
    /// Verse block bounds; bottom edge sits on the base line.
    pub verse: Rect,
    /// Citation bounds, a fixed gap below the base line.
    pub citation: Rect,
    /// Union of both text rects inflated by the box padding.
    pub backdrop: Rect,
    pub backdrop_radius: f64,
}

impl StoryLayout {
    pub fn backdrop_shape(&self) -> RoundedRect {
        RoundedRect::from_rect(self.backdrop, self.backdrop_radius)
    }

    pub fn verse_origin(&self) -> Point {
        self.verse.origin()
    }

    pub fn citation_origin(&self) -> Point {
        self.citation.origin()
    }
}

/// Vertical anchor for the verse block's bottom edge.
pub fn base_line_y(config: &StoryConfig) -> f64 {
    (f64::from(config.canvas.height) * config.base_y_ratio).floor()
}

fn centered_x(canvas_w: f64, w: f64) -> f64 {
    ((canvas_w - w) / 2.0).floor()
}

/// Place the verse block, citation and backdrop for the given text extents.
///
/// Pure function of its inputs: identical extents always produce identical geometry.
pub fn compose_story_layout(config: &StoryConfig, verse: Size, citation: Size) -> StoryLayout {
    let canvas_w = f64::from(config.canvas.width);
    let base_y = base_line_y(config);

    let verse_rect = Rect::from_origin_size(
        Point::new(centered_x(canvas_w, verse.width), base_y - verse.height),
        verse,
    );
    let citation_rect = Rect::from_origin_size(
        Point::new(
            centered_x(canvas_w, citation.width),
            base_y + config.citation_gap,
        ),
        citation,
    );
    let backdrop = verse_rect
        .union(citation_rect)
        .inflate(config.box_padding_x, config.box_padding_y);

    StoryLayout {
        verse: verse_rect,
        citation: citation_rect,
        backdrop,
        backdrop_radius: config.box_radius,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/story.rs"]
mod tests;
