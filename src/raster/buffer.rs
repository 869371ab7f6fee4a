use crate::foundation::error::{RefractError, RefractResult};
use crate::foundation::math::checked_len;

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Row-major RGBA8 pixel grid.
///
/// The invariant `data.len() == width * height * 4` with both sides positive is
/// checked on construction and cannot be broken afterwards: the byte vector is
/// only reachable through slices of fixed length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Allocate a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> RefractResult<Self> {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    /// Allocate a buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> RefractResult<Self> {
        let len = expected_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: rgba.repeat(len / CHANNELS),
        })
    }

    /// Wrap tightly packed RGBA8 bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> RefractResult<Self> {
        let len = expected_len(width, height)?;
        if data.len() != len {
            return Err(RefractError::dimensions(format!(
                "expected {len} bytes for {width}x{height} rgba8, got {}",
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

    /// Raw RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Release the pixel storage.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Number of bytes in one row.
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics when the coordinate lies outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics when the coordinate lies outside the buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    /// Copy rotated 180 degrees about the center: `(x, y)` takes the pixel at
    /// `(width-1-x, height-1-y)`.
    pub fn point_mirrored(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(CHANNELS).rev() {
            data.extend_from_slice(px);
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

fn expected_len(width: u32, height: u32) -> RefractResult<usize> {
    if width == 0 || height == 0 {
        return Err(RefractError::dimensions(format!(
            "width and height must be > 0, got {width}x{height}"
        )));
    }
    checked_len(width, height, CHANNELS)
        .ok_or_else(|| RefractError::dimensions("rgba8 buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
