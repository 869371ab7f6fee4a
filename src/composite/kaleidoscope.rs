use kurbo::{Affine, Point, Vec2};

use crate::engine::opts::EngineOpts;
use crate::engine::rows::for_each_row;
use crate::foundation::error::{RefractError, RefractResult};
use crate::foundation::math::snap_unit;
use crate::raster::buffer::{CHANNELS, RasterBuffer};

/// Largest accepted kaleidoscope segment count.
pub const MAX_SEGMENT_COUNT: u32 = 360;

/// Radially tile rotated copies of one fixed wedge of the source.
///
/// The wedge is the half of the image above the diagonal running from the
/// top-left to the bottom-right corner. Copy `i` is that wedge rotated
/// clockwise about the image center by `rotation_degrees + i * 360 /
/// segment_count`, sampled nearest-neighbour. Copies are added per channel
/// into an opaque black canvas and saturate at 255. Two segments tile the
/// image exactly; more segments overlap.
pub fn composite_kaleidoscope(
    src: &RasterBuffer,
    segment_count: u32,
    rotation_degrees: f32,
    opts: &EngineOpts,
) -> RefractResult<RasterBuffer> {
    validate_segment_count(segment_count)?;
    validate_rotation(rotation_degrees)?;

    let (w, h) = (src.width(), src.height());
    let center = Vec2::new(f64::from(w) / 2.0, f64::from(h) / 2.0);
    let step = 360.0 / f64::from(segment_count);
    let phase = f64::from(rotation_degrees).rem_euclid(360.0);
    tracing::debug!(segment_count, step, phase, "kaleidoscope segments");

    // Destination -> source mappings, one per segment.
    let inverse = (0..segment_count)
        .map(|i| rotate_about(center, -(phase + f64::from(i) * step)))
        .collect::<Vec<_>>();
    let wedge = Wedge {
        center,
        width: f64::from(w),
        height: f64::from(h),
    };

    let mut out = RasterBuffer::new(w, h)?;
    let stride = src.stride();
    let data = src.data();

    for_each_row(out.data_mut(), stride, opts, |y, row| {
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let dst = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let mut acc = [0u16, 0, 0, 255];
            for (i, map) in inverse.iter().enumerate() {
                let q = *map * dst;
                if !wedge.contains(q, i == 0) {
                    continue;
                }
                let (sx, sy) = (q.x.floor(), q.y.floor());
                if sx < 0.0 || sy < 0.0 || sx >= wedge.width || sy >= wedge.height {
                    continue;
                }
                let s = sy as usize * stride + sx as usize * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] = (acc[c] + u16::from(data[s + c])).min(255);
                }
            }
            for c in 0..CHANNELS {
                px[c] = acc[c] as u8;
            }
        }
    })?;
    Ok(out)
}

pub(crate) fn validate_segment_count(segment_count: u32) -> RefractResult<()> {
    if !(2..=MAX_SEGMENT_COUNT).contains(&segment_count) {
        return Err(RefractError::parameter(format!(
            "segment_count must be in 2..={MAX_SEGMENT_COUNT}, got {segment_count}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_rotation(rotation_degrees: f32) -> RefractResult<()> {
    if !rotation_degrees.is_finite() {
        return Err(RefractError::parameter("rotation_degrees must be finite"));
    }
    Ok(())
}

/// Clockwise (y-down) rotation by `degrees` about `center`.
fn rotate_about(center: Vec2, degrees: f64) -> Affine {
    let (s, c) = degrees.to_radians().sin_cos();
    let (s, c) = (snap_unit(s), snap_unit(c));
    Affine::translate(center) * Affine::new([c, s, -s, c, 0.0, 0.0]) * Affine::translate(-center)
}

struct Wedge {
    center: Vec2,
    width: f64,
    height: f64,
}

impl Wedge {
    /// Half-open membership so that a wedge and its half-turn never share a point.
    fn contains(&self, p: Point, owns_apex: bool) -> bool {
        let (u, v) = (p.x - self.center.x, p.y - self.center.y);
        if u == 0.0 && v == 0.0 {
            return owns_apex;
        }
        let side = u * self.height - v * self.width;
        side > 0.0 || (side == 0.0 && u > 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/kaleidoscope.rs"]
mod tests;
