use crate::engine::opts::EngineOpts;
use crate::engine::rows::for_each_row;
use crate::foundation::error::{RefractError, RefractResult};
use crate::mask::blur::soften_mask;
use crate::raster::weights::WeightField;

/// Binary diamond (L1 ball) mask centered on the image.
///
/// A pixel is fully weighted when
/// `|x - cx| / (width * diamond_size) + |y - cy| / (height * diamond_size) < 1`,
/// with `(cx, cy)` the center of the pixel grid. Sizes above roughly 2 cover
/// the whole image.
pub fn generate_diamond_mask(
    width: u32,
    height: u32,
    diamond_size: f32,
) -> RefractResult<WeightField> {
    diamond_into(width, height, diamond_size, &EngineOpts::default())
}

/// Diamond mask feathered by a Gaussian of sigma `edge_softness`.
///
/// `edge_softness == 0` yields exactly [`generate_diamond_mask`].
pub fn diamond_mask(
    width: u32,
    height: u32,
    diamond_size: f32,
    edge_softness: f32,
    opts: &EngineOpts,
) -> RefractResult<WeightField> {
    let mask = diamond_into(width, height, diamond_size, opts)?;
    if edge_softness == 0.0 {
        return Ok(mask);
    }
    soften_mask(&mask, edge_softness, opts)
}

pub(crate) fn validate_diamond_size(diamond_size: f32) -> RefractResult<()> {
    if !diamond_size.is_finite() || diamond_size <= 0.0 {
        return Err(RefractError::parameter(
            "diamond_size must be finite and > 0",
        ));
    }
    Ok(())
}

fn diamond_into(
    width: u32,
    height: u32,
    diamond_size: f32,
    opts: &EngineOpts,
) -> RefractResult<WeightField> {
    validate_diamond_size(diamond_size)?;
    let mut mask = WeightField::new(width, height)?;

    let size = f64::from(diamond_size);
    let (cx, cy) = (
        (f64::from(width) - 1.0) / 2.0,
        (f64::from(height) - 1.0) / 2.0,
    );
    let (sx, sy) = (f64::from(width) * size, f64::from(height) * size);

    for_each_row(mask.data_mut(), width as usize, opts, |y, row| {
        let dy = (y as f64 - cy).abs() / sy;
        for (x, w) in row.iter_mut().enumerate() {
            let dx = (x as f64 - cx).abs() / sx;
            *w = if dx + dy < 1.0 { 255 } else { 0 };
        }
    })?;
    Ok(mask)
}

#[cfg(test)]
#[path = "../../tests/unit/mask/diamond.rs"]
mod tests;
