use std::f64::consts::{PI, TAU};

use kurbo::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::distort::sample::sample_bilinear_wrapped;
use crate::engine::opts::EngineOpts;
use crate::engine::rows::for_each_row;
use crate::foundation::error::{RefractError, RefractResult};
use crate::foundation::math::wrap_coord;
use crate::raster::buffer::{CHANNELS, RasterBuffer};

/// Polar refraction remap with random jitter.
///
/// For each destination pixel at polar `(distance, angle)` around the image
/// center, the source is sampled (bilinear, wrap-around) at
///
/// ```text
/// r     = distance * (1 - focus) + random() * section_size * focus
/// theta = angle + (random() * 2pi - pi) * focus
/// section_size = floor(min(width, height) / (refraction_count * 0.1))
/// ```
///
/// `focus == 0` returns an exact copy and draws nothing from `rng`. Otherwise a
/// single `u64` is drawn from `rng` and every row derives its own generator
/// from it, so results depend only on `rng`'s state and not on threading.
pub fn apply_radial_distortion<R: Rng>(
    src: &RasterBuffer,
    refraction_count: f32,
    focus: f32,
    rng: &mut R,
    opts: &EngineOpts,
) -> RefractResult<RasterBuffer> {
    validate_refraction_count(refraction_count)?;
    validate_focus(focus)?;
    if focus == 0.0 {
        return Ok(src.clone());
    }

    let (w, h) = (f64::from(src.width()), f64::from(src.height()));
    let section_size = section_size(src.width(), src.height(), refraction_count);
    let focus = f64::from(focus);
    let center = Vec2::new(w / 2.0, h / 2.0);
    let base_seed: u64 = rng.random();
    tracing::debug!(section_size, focus, "radial distortion");

    let mut out = RasterBuffer::new(src.width(), src.height())?;
    for_each_row(out.data_mut(), src.stride(), opts, |y, row| {
        let mut jitter = StdRng::seed_from_u64(row_seed(base_seed, y));
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let d = Vec2::new(x as f64, y as f64) - center;
            let r = d.hypot() * (1.0 - focus) + jitter.random::<f64>() * section_size * focus;
            let theta = d.atan2() + (jitter.random::<f64>() * TAU - PI) * focus;
            let s = center + Vec2::from_angle(theta) * r;
            px.copy_from_slice(&sample_bilinear_wrapped(
                src,
                wrap_coord(s.x, w),
                wrap_coord(s.y, h),
            ));
        }
    })?;
    Ok(out)
}

pub(crate) fn validate_refraction_count(refraction_count: f32) -> RefractResult<()> {
    if !refraction_count.is_finite() || refraction_count <= 0.0 {
        return Err(RefractError::parameter(
            "refraction_count must be finite and > 0",
        ));
    }
    Ok(())
}

pub(crate) fn validate_focus(focus: f32) -> RefractResult<()> {
    if !(0.0..=1.0).contains(&focus) {
        return Err(RefractError::parameter(
            "refraction_focus must be in [0, 1]",
        ));
    }
    Ok(())
}

fn section_size(width: u32, height: u32, refraction_count: f32) -> f64 {
    (f64::from(width.min(height)) / (f64::from(refraction_count) * 0.1)).floor()
}

fn row_seed(base: u64, y: usize) -> u64 {
    base ^ (y as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
#[path = "../../tests/unit/distort/radial.rs"]
mod tests;
