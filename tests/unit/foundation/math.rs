use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"verse");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"ver");
    b.write_bytes(b"se");
    assert_eq!(a.finish(), b.finish());
    assert_ne!(a.finish(), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    assert_ne!(Rng64::new(1).next_u64(), Rng64::new(2).next_u64());
}

#[test]
fn next_index_stays_in_range_and_covers_all_slots() {
    let mut rng = Rng64::new(42);
    let mut seen = [0usize; 5];
    for _ in 0..5_000 {
        let i = rng.next_index(5);
        assert!(i < 5);
        seen[i] += 1;
    }
    for count in seen {
        assert!((800..1200).contains(&count), "skewed bucket: {count}");
    }
    assert_eq!(rng.next_index(1), 0);
}

#[test]
fn premultiply_then_unpremultiply_opaque_is_identity() {
    let mut px = [10u8, 200, 30, 255, 99, 99, 99, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[10, 200, 30, 255]);
    assert_eq!(&px[4..], &[0, 0, 0, 0]);
    assert_eq!(unpremultiply_rgb8([10, 200, 30, 255]), [10, 200, 30]);
}

#[test]
fn unpremultiply_half_alpha() {
    // 200 * 128 / 255 ~= 100
    assert_eq!(unpremultiply_rgb8([100, 0, 0, 128]), [199, 0, 0]);
    assert_eq!(unpremultiply_rgb8([5, 5, 5, 0]), [0, 0, 0]);
}
