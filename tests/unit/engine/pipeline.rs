use super::*;
use crate::engine::opts::CancelToken;
use crate::foundation::error::RefractError;

#[test]
fn reflection_with_full_diamond_is_identity() {
    let img = RasterBuffer::filled(4, 4, [255, 0, 0, 255]).unwrap();
    let out = apply_effect(
        &img,
        &Effect::Reflection {
            diamond_size: 1.0,
            edge_softness: 0.0,
        },
    )
    .unwrap();
    assert_eq!(out, img);
}

#[test]
fn seeded_distortion_is_reproducible() {
    let mut img = RasterBuffer::new(16, 12).unwrap();
    for y in 0..12 {
        for x in 0..16 {
            img.set_pixel(x, y, [(x * 16) as u8, (y * 20) as u8, 0, 255]);
        }
    }
    let effect = Effect::Distortion {
        refraction_count: 1.0,
        refraction_focus: 0.8,
        seed: Some(5),
    };
    assert_eq!(
        apply_effect(&img, &effect).unwrap(),
        apply_effect(&img, &effect).unwrap()
    );
}

#[test]
fn invalid_effect_fails_before_any_work() {
    let img = RasterBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
    let err = apply_effect(
        &img,
        &Effect::Kaleidoscope {
            segment_count: 1,
            rotation_degrees: 0.0,
        },
    )
    .unwrap_err();
    assert!(matches!(err, RefractError::InvalidParameter(_)));
}

#[test]
fn cancelled_opts_return_no_output() {
    let token = CancelToken::new();
    token.cancel();
    let opts = EngineOpts::default().with_cancel(token);
    let img = RasterBuffer::filled(8, 8, [1, 2, 3, 255]).unwrap();
    let err = apply_effect_with_opts(
        &img,
        &Effect::Kaleidoscope {
            segment_count: 4,
            rotation_degrees: 0.0,
        },
        &opts,
    )
    .unwrap_err();
    assert!(matches!(err, RefractError::Cancelled));
}

#[test]
fn process_image_roundtrips_through_png() {
    let img = RasterBuffer::filled(6, 4, [10, 200, 30, 255]).unwrap();
    let png = encode_png(&img).unwrap();
    let out = process_image(
        &png,
        &Effect::Kaleidoscope {
            segment_count: 2,
            rotation_degrees: 0.0,
        },
        &EngineOpts::default(),
    )
    .unwrap();
    assert_eq!(decode_image(&out).unwrap(), img);
}

#[test]
fn process_image_reports_decode_errors() {
    let err = process_image(
        b"nope",
        &Effect::Reflection {
            diamond_size: 0.5,
            edge_softness: 0.0,
        },
        &EngineOpts::default(),
    )
    .unwrap_err();
    assert!(matches!(err, RefractError::Decode(_)));
}
