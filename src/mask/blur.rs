use crate::engine::opts::EngineOpts;
use crate::engine::rows::for_each_row;
use crate::foundation::error::{RefractError, RefractResult};
use crate::raster::weights::WeightField;

/// Largest accepted edge softness (Gaussian sigma, in pixels).
pub const MAX_EDGE_SOFTNESS: f32 = 1000.0;

/// Feather a weight field with a separable Gaussian blur.
///
/// `edge_softness` is the Gaussian sigma in pixels; the kernel spans
/// `ceil(3 * sigma)` pixels on each side and reads clamp to the field edges.
/// A softness of `0` returns an exact copy.
pub fn soften_mask(
    mask: &WeightField,
    edge_softness: f32,
    opts: &EngineOpts,
) -> RefractResult<WeightField> {
    validate_edge_softness(edge_softness)?;
    let radius = (3.0 * edge_softness).ceil() as u32;
    if radius == 0 {
        return Ok(mask.clone());
    }

    let kernel = gaussian_kernel_q16(radius, edge_softness)?;
    tracing::debug!(radius, taps = kernel.len(), "softening mask");

    let (width, height) = (mask.width(), mask.height());
    let mut tmp = WeightField::new(width, height)?;
    let mut out = WeightField::new(width, height)?;
    horizontal_pass(mask.data(), tmp.data_mut(), width, &kernel, opts)?;
    vertical_pass(tmp.data(), out.data_mut(), width, height, &kernel, opts)?;
    Ok(out)
}

pub(crate) fn validate_edge_softness(edge_softness: f32) -> RefractResult<()> {
    if !edge_softness.is_finite() || edge_softness < 0.0 {
        return Err(RefractError::parameter(
            "edge_softness must be finite and >= 0",
        ));
    }
    if edge_softness > MAX_EDGE_SOFTNESS {
        return Err(RefractError::parameter(format!(
            "edge_softness must be <= {MAX_EDGE_SOFTNESS}"
        )));
    }
    Ok(())
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> RefractResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(RefractError::parameter("blur sigma must be > 0"));
    }

    let r = radius as i64;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Rounding drift lands on the center tap so the kernel sums to exactly 1.0.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

fn horizontal_pass(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    k: &[u32],
    opts: &EngineOpts,
) -> RefractResult<()> {
    let radius = (k.len() / 2) as i64;
    let w = width as usize;
    for_each_row(dst, w, opts, |y, row| {
        let src_row = &src[y * w..(y + 1) * w];
        for (x, out) in row.iter_mut().enumerate() {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x as i64 + ki as i64 - radius).clamp(0, w as i64 - 1) as usize;
                acc += u64::from(kw) * u64::from(src_row[sx]);
            }
            *out = q16_to_u8(acc);
        }
    })
}

fn vertical_pass(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    k: &[u32],
    opts: &EngineOpts,
) -> RefractResult<()> {
    let radius = (k.len() / 2) as i64;
    let (w, h) = (width as usize, height as i64);
    for_each_row(dst, w, opts, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y as i64 + ki as i64 - radius).clamp(0, h - 1) as usize;
                acc += u64::from(kw) * u64::from(src[sy * w + x]);
            }
            *out = q16_to_u8(acc);
        }
    })
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/mask/blur.rs"]
mod tests;
