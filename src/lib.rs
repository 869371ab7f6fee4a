//! Refractor is a pixel-space image effect engine.
//!
//! Every effect is a pure function of a decoded RGBA8 image and a small
//! parameter set:
//!
//! - **Reflection**: a diamond (L1 ball) [`WeightField`], optionally feathered,
//!   blends each pixel with its point-mirrored counterpart.
//! - **Kaleidoscope**: rotated copies of one fixed wedge are accumulated into
//!   an opaque canvas.
//! - **Distortion**: every destination pixel samples the source at a randomly
//!   jittered polar coordinate (bilinear, wrap-around).
//!
//! [`apply_effect`] dispatches an [`Effect`] to the matching stage.
//! [`process_image`] wraps that with decoding and PNG encoding.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No hidden state**: randomness comes from an explicit [`rand::Rng`] or a
//!   seed on the effect; a seeded run is reproducible for any thread count.
//! - **Row-parallel**: stages split the destination into row batches on rayon
//!   and poll an optional [`CancelToken`] between batches.
//! - **Straight RGBA8** in and out; no premultiplication.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod composite;
mod distort;
mod effects;
mod engine;
mod foundation;
mod mask;
mod raster;

pub use codec::decode::decode_image;
pub use codec::encode::encode_png;
pub use composite::kaleidoscope::{MAX_SEGMENT_COUNT, composite_kaleidoscope};
pub use composite::mirror::composite_mirror;
pub use distort::radial::apply_radial_distortion;
pub use distort::sample::sample_bilinear_wrapped;
pub use effects::model::Effect;
pub use effects::params::{EffectSpec, defaults, parse_effect};
pub use engine::opts::{CancelToken, EngineOpts};
pub use engine::pipeline::{apply_effect, apply_effect_with_opts, process_image};
pub use foundation::error::{RefractError, RefractResult};
pub use mask::blur::{MAX_EDGE_SOFTNESS, soften_mask};
pub use mask::diamond::{diamond_mask, generate_diamond_mask};
pub use raster::buffer::{CHANNELS, RasterBuffer};
pub use raster::weights::WeightField;
