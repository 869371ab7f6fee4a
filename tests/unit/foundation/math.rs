use super::*;

#[test]
fn lerp_endpoints_are_exact() {
    for a in [0u8, 1, 77, 254, 255] {
        for b in [0u8, 3, 128, 255] {
            assert_eq!(lerp_u8(a, b, 255), a);
            assert_eq!(lerp_u8(a, b, 0), b);
        }
    }
}

#[test]
fn lerp_midpoint_rounds() {
    assert_eq!(lerp_u8(255, 0, 128), 128);
    assert_eq!(lerp_u8(0, 255, 128), 127);
}

#[test]
fn wrap_coord_stays_in_range() {
    let len = 10.0;
    for v in [-1e-17, -0.5, 0.0, 9.999, 10.0, 25.5, -31.0, 1e9] {
        let w = wrap_coord(v, len);
        assert!((0.0..len).contains(&w), "{v} wrapped to {w}");
    }
    assert_eq!(wrap_coord(-0.5, len), 9.5);
    assert_eq!(wrap_coord(12.25, len), 2.25);
}

#[test]
fn snap_unit_only_touches_near_values() {
    assert_eq!(snap_unit(std::f64::consts::PI.sin()), 0.0);
    assert_eq!(snap_unit(std::f64::consts::PI.cos()), -1.0);
    assert_eq!(snap_unit(0.5), 0.5);
}

#[test]
fn checked_len_detects_overflow() {
    assert_eq!(checked_len(4, 3, 4), Some(48));
    assert_eq!(checked_len(u32::MAX, u32::MAX, usize::MAX), None);
}
