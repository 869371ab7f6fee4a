use super::*;
use crate::mask::diamond::{diamond_mask, generate_diamond_mask};

fn gradient(w: u32, h: u32) -> RasterBuffer {
    let mut img = RasterBuffer::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            img.set_pixel(
                x,
                y,
                [(x * 20) as u8, (y * 30) as u8, (x + y) as u8, (100 + x) as u8],
            );
        }
    }
    img
}

#[test]
fn red_square_with_full_diamond_is_unchanged() {
    let img = RasterBuffer::filled(4, 4, [255, 0, 0, 255]).unwrap();
    let mask = generate_diamond_mask(4, 4, 1.0).unwrap();
    assert!(mask.data().iter().all(|&v| v == 255));
    let out = composite_mirror(&img, &mask, &EngineOpts::default()).unwrap();
    assert_eq!(out, img);
}

#[test]
fn full_mask_keeps_colors() {
    let img = gradient(5, 3);
    let mask = WeightField::filled(5, 3, 255).unwrap();
    let out = composite_mirror(&img, &mask, &EngineOpts::default()).unwrap();
    assert_eq!(out, img);
}

#[test]
fn empty_mask_yields_mirror_colors_and_source_alpha() {
    let img = gradient(6, 4);
    let mask = generate_diamond_mask(6, 4, 1e-6).unwrap();
    let out = composite_mirror(&img, &mask, &EngineOpts::default()).unwrap();
    let mirrored = img.point_mirrored();
    for y in 0..4 {
        for x in 0..6 {
            let (o, m, s) = (out.pixel(x, y), mirrored.pixel(x, y), img.pixel(x, y));
            assert_eq!(&o[..3], &m[..3]);
            assert_eq!(o[3], s[3]);
        }
    }
}

#[test]
fn alpha_is_preserved_under_soft_mask() {
    let img = gradient(12, 10);
    let mask = diamond_mask(12, 10, 0.4, 2.0, &EngineOpts::default()).unwrap();
    let out = composite_mirror(&img, &mask, &EngineOpts::default()).unwrap();
    for (o, s) in out.data().chunks_exact(4).zip(img.data().chunks_exact(4)) {
        assert_eq!(o[3], s[3]);
    }
}

#[test]
fn half_weight_averages_with_counterpart() {
    let mut img = RasterBuffer::new(2, 1).unwrap();
    img.set_pixel(0, 0, [200, 0, 100, 255]);
    img.set_pixel(1, 0, [0, 200, 100, 10]);
    let mask = WeightField::filled(2, 1, 128).unwrap();
    let out = composite_mirror(&img, &mask, &EngineOpts::default()).unwrap();
    assert_eq!(out.pixel(0, 0), [100, 100, 100, 255]);
    assert_eq!(out.pixel(1, 0), [100, 100, 100, 10]);
}

#[test]
fn mismatched_mask_is_rejected() {
    let img = gradient(4, 4);
    let mask = WeightField::filled(4, 3, 255).unwrap();
    assert!(matches!(
        composite_mirror(&img, &mask, &EngineOpts::default()),
        Err(RefractError::InvalidDimensions(_))
    ));
}
