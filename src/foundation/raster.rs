use crate::foundation::error::{ImaugError, ImaugResult};

/// Channel layout of an 8-bit [`Raster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Grayscale.
    Luma,
    /// Grayscale plus straight alpha.
    LumaAlpha,
    /// Three color channels.
    Rgb,
    /// Three color channels plus straight alpha.
    Rgba,
}

impl PixelLayout {
    /// Interleaved channels per pixel.
    pub fn channels(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::LumaAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether the last channel is alpha.
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::LumaAlpha | Self::Rgba)
    }

    /// Channels carrying color (everything except alpha).
    pub fn color_channels(self) -> usize {
        if self.has_alpha() {
            self.channels() - 1
        } else {
            self.channels()
        }
    }
}

/// In-memory pixel grid: `height` rows of `width` pixels, interleaved 8-bit channels,
/// row-major, no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap an interleaved buffer. `data.len()` must equal `width * height * channels`.
    pub fn new(width: u32, height: u32, layout: PixelLayout, data: Vec<u8>) -> ImaugResult<Self> {
        let expected = buffer_len(width, height, layout)?;
        if data.len() != expected {
            return Err(ImaugError::transform(format!(
                "raster buffer has {} bytes, expected {expected} for {width}x{height} {layout:?}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// A raster where every pixel equals `px`.
    pub fn filled(width: u32, height: u32, layout: PixelLayout, px: &[u8]) -> ImaugResult<Self> {
        if px.len() != layout.channels() {
            return Err(ImaugError::transform(format!(
                "fill pixel has {} channels, layout {layout:?} needs {}",
                px.len(),
                layout.channels()
            )));
        }
        let n = buffer_len(width, height, layout)? / layout.channels();
        Self::new(width, height, layout, px.repeat(n))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Channel layout.
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Raw interleaved bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster, returning its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// True when the raster has no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Channels of the pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.layout.channels();
        let idx = (y as usize * self.width as usize + x as usize) * c;
        &self.data[idx..idx + c]
    }

    pub(crate) fn stride(&self) -> usize {
        self.width as usize * self.layout.channels()
    }

    pub(crate) fn ensure_non_degenerate(&self, op: &str) -> ImaugResult<()> {
        if self.is_degenerate() {
            return Err(ImaugError::transform(format!(
                "{op} cannot be applied to a zero-area image ({}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

fn buffer_len(width: u32, height: u32, layout: PixelLayout) -> ImaugResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(layout.channels()))
        .ok_or_else(|| ImaugError::transform("raster buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/raster.rs"]
mod tests;
