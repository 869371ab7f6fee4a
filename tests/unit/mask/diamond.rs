use super::*;

#[test]
fn unblurred_mask_is_binary() {
    for (w, h) in [(1u32, 1u32), (2, 3), (17, 9), (64, 64)] {
        for size in [0.05f32, 0.3, 0.5, 1.0, 3.0] {
            let m = generate_diamond_mask(w, h, size).unwrap();
            assert!(m.is_binary(), "{w}x{h} size {size}");
        }
    }
}

#[test]
fn unblurred_mask_is_mirror_symmetric() {
    for (w, h) in [(8u32, 5u32), (9, 9), (12, 31)] {
        let m = generate_diamond_mask(w, h, 0.4).unwrap();
        for y in 0..h {
            for x in 0..w {
                let v = m.weight(x, y);
                assert_eq!(v, m.weight(w - 1 - x, y));
                assert_eq!(v, m.weight(x, h - 1 - y));
            }
        }
    }
}

#[test]
fn full_size_covers_small_image() {
    let m = generate_diamond_mask(4, 4, 1.0).unwrap();
    assert!(m.data().iter().all(|&v| v == 255));
}

#[test]
fn large_size_degenerates_to_all_inside() {
    let m = generate_diamond_mask(33, 21, 2.5).unwrap();
    assert!(m.data().iter().all(|&v| v == 255));
}

#[test]
fn tiny_size_on_even_image_is_empty() {
    let m = generate_diamond_mask(10, 6, 1e-6).unwrap();
    assert!(m.data().iter().all(|&v| v == 0));
}

#[test]
fn center_is_inside_and_corners_outside() {
    let m = generate_diamond_mask(21, 21, 0.5).unwrap();
    assert_eq!(m.weight(10, 10), 255);
    assert_eq!(m.weight(0, 0), 0);
    assert_eq!(m.weight(20, 20), 0);
    // On-axis boundary: |x - 10| / 10.5 < 1 holds up to x = 0.
    assert_eq!(m.weight(0, 10), 255);
}

#[test]
fn non_positive_size_is_rejected() {
    for bad in [0.0f32, -0.5, f32::NAN] {
        assert!(matches!(
            generate_diamond_mask(4, 4, bad),
            Err(RefractError::InvalidParameter(_))
        ));
    }
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        generate_diamond_mask(0, 4, 0.5),
        Err(RefractError::InvalidDimensions(_))
    ));
}

#[test]
fn softness_0_matches_binary_mask() {
    let a = generate_diamond_mask(20, 14, 0.5).unwrap();
    let b = diamond_mask(20, 14, 0.5, 0.0, &EngineOpts::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn softness_produces_intermediate_weights() {
    let m = diamond_mask(40, 40, 0.5, 3.0, &EngineOpts::default()).unwrap();
    assert!(!m.is_binary());
    assert_eq!(m.weight(20, 20), 255);
    assert_eq!(m.weight(0, 0), 0);
}
