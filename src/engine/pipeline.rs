use rand::{SeedableRng, rngs::StdRng};

use crate::codec::decode::decode_image;
use crate::codec::encode::encode_png;
use crate::composite::kaleidoscope::composite_kaleidoscope;
use crate::composite::mirror::composite_mirror;
use crate::distort::radial::apply_radial_distortion;
use crate::effects::model::Effect;
use crate::engine::opts::EngineOpts;
use crate::foundation::error::RefractResult;
use crate::mask::diamond::diamond_mask;
use crate::raster::buffer::RasterBuffer;

/// Run one effect over the whole image with default [`EngineOpts`].
///
/// This is the single dispatch point for all effect families:
/// - `Reflection`: [`diamond_mask`] then [`composite_mirror`]
/// - `Kaleidoscope`: [`composite_kaleidoscope`]
/// - `Distortion`: [`apply_radial_distortion`]
pub fn apply_effect(src: &RasterBuffer, effect: &Effect) -> RefractResult<RasterBuffer> {
    apply_effect_with_opts(src, effect, &EngineOpts::default())
}

/// Run one effect with explicit threading, batching and cancellation controls.
///
/// Parameters are validated up front; on any error no output is produced.
#[tracing::instrument(
    skip_all,
    fields(effect = effect.name(), width = src.width(), height = src.height())
)]
pub fn apply_effect_with_opts(
    src: &RasterBuffer,
    effect: &Effect,
    opts: &EngineOpts,
) -> RefractResult<RasterBuffer> {
    effect.validate()?;
    opts.check_cancelled()?;

    match *effect {
        Effect::Reflection {
            diamond_size,
            edge_softness,
        } => {
            let mask = diamond_mask(
                src.width(),
                src.height(),
                diamond_size,
                edge_softness,
                opts,
            )?;
            composite_mirror(src, &mask, opts)
        }
        Effect::Kaleidoscope {
            segment_count,
            rotation_degrees,
        } => composite_kaleidoscope(src, segment_count, rotation_degrees, opts),
        Effect::Distortion {
            refraction_count,
            refraction_focus,
            seed,
        } => match seed {
            Some(seed) => apply_radial_distortion(
                src,
                refraction_count,
                refraction_focus,
                &mut StdRng::seed_from_u64(seed),
                opts,
            ),
            None => apply_radial_distortion(
                src,
                refraction_count,
                refraction_focus,
                &mut rand::rng(),
                opts,
            ),
        },
    }
}

/// Decode `bytes`, apply `effect`, and return the result as PNG.
#[tracing::instrument(skip_all, fields(effect = effect.name(), input_len = bytes.len()))]
pub fn process_image(bytes: &[u8], effect: &Effect, opts: &EngineOpts) -> RefractResult<Vec<u8>> {
    let src = decode_image(bytes)?;
    let out = apply_effect_with_opts(&src, effect, opts)?;
    encode_png(&out)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/pipeline.rs"]
mod tests;
