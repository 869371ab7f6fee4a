use crate::foundation::error::{RefractError, RefractResult};
use crate::raster::buffer::RasterBuffer;

/// Decode any container format the `image` crate recognizes into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> RefractResult<RasterBuffer> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| RefractError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(RefractError::dimensions(format!(
            "decoded image has no pixels ({width}x{height})"
        )));
    }
    RasterBuffer::from_raw(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/decode.rs"]
mod tests;
