use crate::effects::model::Effect;
use crate::foundation::error::{RefractError, RefractResult};

/// Loosely typed effect request as it arrives from a form or JSON file.
///
/// `params` may omit any field; [`parse_effect`] fills product defaults and
/// clamps to the ranges the UI exposes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectSpec {
    /// Effect family name, e.g. `"reflection"`.
    pub kind: String,
    /// Free-form parameter object.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Product defaults used when a parameter is missing.
pub mod defaults {
    /// Diamond size as a fraction of the image.
    pub const DIAMOND_SIZE: f32 = 0.5;
    /// Mask edge softness in pixels.
    pub const EDGE_SOFTNESS: f32 = 20.0;
    /// Kaleidoscope copies.
    pub const SEGMENT_COUNT: u32 = 6;
    /// Kaleidoscope phase.
    pub const ROTATION_DEGREES: f32 = 0.0;
    /// Refraction divisor.
    pub const REFRACTION_COUNT: f32 = 0.5;
    /// Refraction jitter blend.
    pub const REFRACTION_FOCUS: f32 = 0.5;
}

const DIAMOND_SIZE_RANGE: (f32, f32) = (0.1, 1.0);
const EDGE_SOFTNESS_RANGE: (f32, f32) = (0.0, 100.0);
const SEGMENT_COUNT_RANGE: (u32, u32) = (2, 64);
const REFRACTION_COUNT_RANGE: (f32, f32) = (0.01, 100.0);
const REFRACTION_FOCUS_RANGE: (f32, f32) = (0.0, 1.0);

/// Resolve an [`EffectSpec`] into a validated [`Effect`].
pub fn parse_effect(spec: &EffectSpec) -> RefractResult<Effect> {
    let kind = spec.kind.trim().to_ascii_lowercase().replace('-', "_");
    if kind.is_empty() {
        return Err(RefractError::parameter("effect kind must be non-empty"));
    }
    let params = &spec.params;
    if !(params.is_null() || params.is_object()) {
        return Err(RefractError::parameter("effect params must be an object"));
    }

    let effect = match kind.as_str() {
        "reflection" | "diamond_reflection" | "mirror" => Effect::Reflection {
            diamond_size: clamp_f32(
                get_f32_or(params, "diamond_size", defaults::DIAMOND_SIZE)?,
                DIAMOND_SIZE_RANGE,
            ),
            edge_softness: clamp_f32(
                get_f32_or(params, "edge_softness", defaults::EDGE_SOFTNESS)?,
                EDGE_SOFTNESS_RANGE,
            ),
        },
        "kaleidoscope" => {
            let (lo, hi) = SEGMENT_COUNT_RANGE;
            Effect::Kaleidoscope {
                segment_count: get_u32_or(params, "segment_count", defaults::SEGMENT_COUNT)?
                    .clamp(lo, hi),
                rotation_degrees: get_f32_or(
                    params,
                    "rotation_degrees",
                    defaults::ROTATION_DEGREES,
                )?
                .rem_euclid(360.0),
            }
        }
        "distortion" | "refraction" | "radial_distortion" => Effect::Distortion {
            refraction_count: clamp_f32(
                get_f32_or(params, "refraction_count", defaults::REFRACTION_COUNT)?,
                REFRACTION_COUNT_RANGE,
            ),
            refraction_focus: clamp_f32(
                get_f32_or(params, "refraction_focus", defaults::REFRACTION_FOCUS)?,
                REFRACTION_FOCUS_RANGE,
            ),
            seed: get_optional_u64(params, "seed")?,
        },
        _ => {
            return Err(RefractError::parameter(format!(
                "unknown effect kind '{kind}'"
            )));
        }
    };

    effect.validate()?;
    Ok(effect)
}

fn clamp_f32(v: f32, (lo, hi): (f32, f32)) -> f32 {
    v.clamp(lo, hi)
}

fn get_f32_or(obj: &serde_json::Value, key: &str, default: f32) -> RefractResult<f32> {
    let Some(v) = obj.get(key) else {
        return Ok(default);
    };
    let Some(n) = v.as_f64() else {
        return Err(RefractError::parameter(format!(
            "effect param '{key}' must be a number"
        )));
    };
    let n = n as f32;
    if !n.is_finite() {
        return Err(RefractError::parameter(format!(
            "effect param '{key}' must be finite"
        )));
    }
    Ok(n)
}

fn get_u32_or(obj: &serde_json::Value, key: &str, default: u32) -> RefractResult<u32> {
    let Some(v) = obj.get(key) else {
        return Ok(default);
    };
    let Some(n) = v.as_u64() else {
        return Err(RefractError::parameter(format!(
            "effect param '{key}' must be a non-negative integer"
        )));
    };
    Ok(u32::try_from(n).unwrap_or(u32::MAX))
}

fn get_optional_u64(obj: &serde_json::Value, key: &str) -> RefractResult<Option<u64>> {
    match obj.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or_else(|| {
            RefractError::parameter(format!("effect param '{key}' must be a u64"))
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/params.rs"]
mod tests;
