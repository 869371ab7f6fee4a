use std::io::Cursor;

use crate::foundation::error::{RefractError, RefractResult};
use crate::raster::buffer::RasterBuffer;

/// Encode as lossless PNG.
pub fn encode_png(img: &RasterBuffer) -> RefractResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut buf),
        img.data(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| RefractError::encoding(format!("write png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/encode.rs"]
mod tests;
