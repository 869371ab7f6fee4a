use crate::foundation::math::{quantize_u8, wrap_coord};
use crate::raster::buffer::{CHANNELS, RasterBuffer};

/// Bilinear sample at a continuous coordinate with wrap-around addressing.
///
/// Integer coordinates address pixels directly. Both the coordinate and the
/// right/bottom neighbours wrap modulo the image size, so every read stays
/// inside `[0, width) x [0, height)`.
pub fn sample_bilinear_wrapped(src: &RasterBuffer, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (src.width() as usize, src.height() as usize);
    let x = wrap_coord(x, w as f64);
    let y = wrap_coord(y, h as f64);

    let x0 = (x.floor() as usize).min(w - 1);
    let y0 = (y.floor() as usize).min(h - 1);
    let x1 = (x0 + 1) % w;
    let y1 = (y0 + 1) % h;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let data = src.data();
    let stride = src.stride();
    let at = |px: usize, py: usize, c: usize| f64::from(data[py * stride + px * CHANNELS + c]);

    let mut out = [0u8; 4];
    for (c, v) in out.iter_mut().enumerate() {
        let top = at(x0, y0, c) * (1.0 - fx) + at(x1, y0, c) * fx;
        let bot = at(x0, y1, c) * (1.0 - fx) + at(x1, y1, c) * fx;
        *v = quantize_u8(top * (1.0 - fy) + bot * fy);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/distort/sample.rs"]
mod tests;
