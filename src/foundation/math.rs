/// Integer lerp between `a` (at `w == 255`) and `b` (at `w == 0`).
pub(crate) fn lerp_u8(a: u8, b: u8, w: u8) -> u8 {
    let w = u32::from(w);
    ((u32::from(a) * w + u32::from(b) * (255 - w) + 127) / 255) as u8
}

pub(crate) fn quantize_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Wrap `v` into `[0, len)`, never returning `len` itself.
pub(crate) fn wrap_coord(v: f64, len: f64) -> f64 {
    let w = v.rem_euclid(len);
    if w >= len || !w.is_finite() { 0.0 } else { w }
}

/// Snap trig results that should be exactly 0 or +-1.
pub(crate) fn snap_unit(v: f64) -> f64 {
    const EPS: f64 = 1e-9;
    for target in [-1.0, 0.0, 1.0] {
        if (v - target).abs() < EPS {
            return target;
        }
    }
    v
}

pub(crate) fn checked_len(width: u32, height: u32, channels: usize) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
