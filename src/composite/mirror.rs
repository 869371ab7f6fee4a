use crate::engine::opts::EngineOpts;
use crate::engine::rows::for_each_row;
use crate::foundation::error::{RefractError, RefractResult};
use crate::foundation::math::lerp_u8;
use crate::raster::buffer::{CHANNELS, RasterBuffer};
use crate::raster::weights::WeightField;

/// Blend each pixel with its point-mirrored counterpart.
///
/// The counterpart of `(x, y)` is `(width-1-x, height-1-y)`. Color channels are
/// `src * w + mirrored * (1 - w)` with `w = mask / 255`; alpha is copied from
/// `src` unchanged.
pub fn composite_mirror(
    src: &RasterBuffer,
    mask: &WeightField,
    opts: &EngineOpts,
) -> RefractResult<RasterBuffer> {
    if !mask.matches(src) {
        return Err(RefractError::dimensions(format!(
            "mask is {}x{} but image is {}x{}",
            mask.width(),
            mask.height(),
            src.width(),
            src.height()
        )));
    }

    let mut out = RasterBuffer::new(src.width(), src.height())?;
    let stride = src.stride();
    let width = src.width() as usize;
    let total = src.data().len();
    let (data, weights) = (src.data(), mask.data());

    for_each_row(out.data_mut(), stride, opts, |y, row| {
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let i = y * stride + x * CHANNELS;
            let m = total - i - CHANNELS;
            let w = weights[y * width + x];
            for c in 0..3 {
                px[c] = lerp_u8(data[i + c], data[m + c], w);
            }
            px[3] = data[i + 3];
        }
    })?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/mirror.rs"]
mod tests;
