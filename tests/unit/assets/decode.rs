use std::io::Cursor;

use super::*;

fn encode_png(img: &image::RgbaImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn background_is_stretched_to_canvas() {
    let src = image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]));
    let canvas = Canvas::new(9, 16).unwrap();
    let img = decode_background(&encode_png(&src), canvas).unwrap();
    assert_eq!((img.width, img.height), (9, 16));
    assert_eq!(img.rgba8_premul.len(), canvas.byte_len_rgba8());
    for (got, want) in img.rgba8_premul[..4].iter().zip([10u8, 20, 30, 255]) {
        assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
    }
}

#[test]
fn translucent_pixels_are_premultiplied() {
    let src = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 0]));
    let canvas = Canvas::new(1, 1).unwrap();
    let img = decode_background(&encode_png(&src), canvas).unwrap();
    assert_eq!(img.rgba8_premul, vec![0, 0, 0, 0]);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let canvas = Canvas::new(2, 2).unwrap();
    let err = decode_background(b"not an image", canvas).unwrap_err();
    assert!(err.to_string().contains("decode background image"));
}

#[test]
fn missing_background_is_fatal() {
    let err = load_background(Path::new("nope/bg.png"), Canvas::STORY).unwrap_err();
    assert!(err.to_string().contains("nope/bg.png"));
}
