use crate::foundation::error::{RefractError, RefractResult};
use crate::foundation::math::checked_len;
use crate::raster::buffer::RasterBuffer;

/// Single-channel blend weights, `0` (outside) to `255` (inside).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightField {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl WeightField {
    /// Allocate an all-zero field.
    pub fn new(width: u32, height: u32) -> RefractResult<Self> {
        Self::filled(width, height, 0)
    }

    /// Allocate a field with every weight set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> RefractResult<Self> {
        let len = expected_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Wrap one weight byte per pixel.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> RefractResult<Self> {
        let len = expected_len(width, height)?;
        if data.len() != len {
            return Err(RefractError::dimensions(format!(
                "expected {len} weights for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw weights, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Raw weight at `(x, y)`.
    pub fn weight(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Weight at `(x, y)` normalized to `[0, 1]`.
    pub fn alpha(&self, x: u32, y: u32) -> f32 {
        f32::from(self.weight(x, y)) / 255.0
    }

    /// `true` when every weight is exactly 0 or 255.
    pub fn is_binary(&self) -> bool {
        self.data.iter().all(|&w| w == 0 || w == 255)
    }

    /// `true` when this field governs an image of the same size as `img`.
    pub fn matches(&self, img: &RasterBuffer) -> bool {
        self.width == img.width() && self.height == img.height()
    }
}

fn expected_len(width: u32, height: u32) -> RefractResult<usize> {
    if width == 0 || height == 0 {
        return Err(RefractError::dimensions(format!(
            "weight field sides must be > 0, got {width}x{height}"
        )));
    }
    checked_len(width, height, 1)
        .ok_or_else(|| RefractError::dimensions("weight field size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/weights.rs"]
mod tests;
