use crate::composite::kaleidoscope::{validate_rotation, validate_segment_count};
use crate::distort::radial::{validate_focus, validate_refraction_count};
use crate::foundation::error::RefractResult;
use crate::mask::blur::validate_edge_softness;
use crate::mask::diamond::validate_diamond_size;

/// One effect invocation: the effect family plus the parameters it reads.
///
/// Serialized internally tagged, e.g.
/// `{"effect": "reflection", "diamond_size": 0.5, "edge_softness": 20}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Diamond-masked blend with the point-mirrored image.
    Reflection {
        /// Diamond half-diagonal as a fraction of the image size, `> 0`.
        diamond_size: f32,
        /// Gaussian sigma in pixels applied to the mask edge, `>= 0`.
        edge_softness: f32,
    },
    /// Radially tiled rotated copies of one wedge.
    Kaleidoscope {
        /// Number of rotated copies, `>= 2`.
        segment_count: u32,
        /// Clockwise phase offset applied to every copy.
        #[serde(default)]
        rotation_degrees: f32,
    },
    /// Random polar jitter resampled bilinearly.
    Distortion {
        /// Divisor of the jitter radius; larger counts give tighter refraction.
        refraction_count: f32,
        /// Blend between identity (`0`) and full jitter (`1`).
        refraction_focus: f32,
        /// Fixed seed for reproducible output; fresh entropy when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
}

impl Effect {
    /// Stable snake_case name of the effect family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reflection { .. } => "reflection",
            Self::Kaleidoscope { .. } => "kaleidoscope",
            Self::Distortion { .. } => "distortion",
        }
    }

    /// Check every parameter against its documented domain without clamping.
    pub fn validate(&self) -> RefractResult<()> {
        match *self {
            Self::Reflection {
                diamond_size,
                edge_softness,
            } => {
                validate_diamond_size(diamond_size)?;
                validate_edge_softness(edge_softness)
            }
            Self::Kaleidoscope {
                segment_count,
                rotation_degrees,
            } => {
                validate_segment_count(segment_count)?;
                validate_rotation(rotation_degrees)
            }
            Self::Distortion {
                refraction_count,
                refraction_focus,
                ..
            } => {
                validate_refraction_count(refraction_count)?;
                validate_focus(refraction_focus)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/model.rs"]
mod tests;
