use crate::foundation::error::{StoryError, StoryResult};
use crate::foundation::math::{mul_div255_u16, unpremultiply_rgb8};

pub type PremulRgba8 = [u8; 4];

/// Flattened opaque output frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb8 {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255_u16(u16::from(dst[i]), inv);
        out[i] = (u16::from(src[i]) + dc).min(255) as u8;
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> StoryResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(StoryError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Drop alpha from a premultiplied RGBA8 buffer, recovering straight color.
pub fn flatten_to_rgb(width: u32, height: u32, rgba8_premul: &[u8]) -> StoryResult<FrameRgb8> {
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    if rgba8_premul.len() != expected {
        return Err(StoryError::render("flatten_to_rgb byte length mismatch"));
    }
    let mut data = Vec::with_capacity(expected / 4 * 3);
    for px in rgba8_premul.chunks_exact(4) {
        data.extend_from_slice(&unpremultiply_rgb8([px[0], px[1], px[2], px[3]]));
    }
    Ok(FrameRgb8 {
        width,
        height,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
