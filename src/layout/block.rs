use crate::foundation::core::{Point, Size};

/// Geometry of a multi-line text block.
///
/// Line extents are rounded up to whole pixels. Lines stack top to bottom with `spacing`
/// between consecutive lines and are centered horizontally within the widest line.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockMetrics {
    line_sizes: Vec<Size>,
    spacing: f64,
}

impl BlockMetrics {
    pub fn new(line_sizes: impl IntoIterator<Item = Size>, spacing: f64) -> Self {
        Self {
            line_sizes: line_sizes
                .into_iter()
                .map(|s| Size::new(s.width.max(0.0).ceil(), s.height.max(0.0).ceil()))
                .collect(),
            spacing: spacing.max(0.0),
        }
    }

    pub fn line_sizes(&self) -> &[Size] {
        &self.line_sizes
    }

    pub fn size(&self) -> Size {
        let width = self
            .line_sizes
            .iter()
            .map(|s| s.width)
            .fold(0.0, f64::max);
        let gaps = self.line_sizes.len().saturating_sub(1) as f64;
        let height = self.line_sizes.iter().map(|s| s.height).sum::<f64>() + gaps * self.spacing;
        Size::new(width, height)
    }

    /// Top-left of every line relative to the block's top-left.
    pub fn line_origins(&self) -> Vec<Point> {
        let block_w = self.size().width;
        let mut y = 0.0;
        self.line_sizes
            .iter()
            .map(|s| {
                let origin = Point::new(((block_w - s.width) / 2.0).floor(), y);
                y += s.height + self.spacing;
                origin
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/block.rs"]
mod tests;
