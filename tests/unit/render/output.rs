use chrono::NaiveDate;

use super::*;

fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 7)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn gray_frame(w: u32, h: u32, v: u8) -> FrameRgb8 {
    FrameRgb8 {
        width: w,
        height: h,
        data: vec![v; (w * h * 3) as usize],
    }
}

#[test]
fn file_name_uses_second_resolution_timestamp() {
    assert_eq!(story_file_name(ts(9, 5, 1)), "story_20260307_090501.jpg");
}

#[test]
fn saves_decodable_jpeg_creating_the_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("generated");
    let path = save_story(&gray_frame(16, 24, 128), &out_dir, ts(10, 0, 0), 75).unwrap();

    assert_eq!(path, out_dir.join("story_20260307_100000.jpg"));
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (16, 24));
}

#[test]
fn same_second_saves_overwrite_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let first = save_story(&gray_frame(8, 8, 0), dir.path(), ts(12, 0, 0), 75).unwrap();
    let second = save_story(&gray_frame(8, 8, 255), dir.path(), ts(12, 0, 0), 75).unwrap();

    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    // The surviving file holds the second frame.
    let px = image::open(&second).unwrap().to_rgb8().get_pixel(4, 4).0;
    assert!(px.iter().all(|&c| c > 240), "{px:?}");
}

#[test]
fn different_seconds_produce_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = save_story(&gray_frame(8, 8, 0), dir.path(), ts(12, 0, 0), 75).unwrap();
    let b = save_story(&gray_frame(8, 8, 0), dir.path(), ts(12, 0, 1), 75).unwrap();
    assert_ne!(a, b);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn failed_encode_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let good = save_story(&gray_frame(8, 8, 0), dir.path(), ts(12, 0, 0), 75).unwrap();
    let before = std::fs::read(&good).unwrap();

    let short = FrameRgb8 {
        width: 8,
        height: 8,
        data: vec![0; 10],
    };
    let err = save_story(&short, dir.path(), ts(12, 0, 0), 75).unwrap_err();
    assert!(matches!(err, StoryError::Render(_)));
    assert_eq!(std::fs::read(&good).unwrap(), before);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

    let fresh = dir.path().join("fresh");
    assert!(save_story(&short, &fresh, ts(12, 0, 1), 75).is_err());
    assert!(!fresh.exists());
}
