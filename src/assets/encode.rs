use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::foundation::error::{ImaugError, ImaugResult};
use crate::foundation::raster::{PixelLayout, Raster};

/// Encode a raster as PNG bytes (lossless, same channel layout).
pub fn encode_png(raster: &Raster) -> ImaugResult<Vec<u8>> {
    raster.ensure_non_degenerate("png encoding")?;
    let color = match raster.layout() {
        PixelLayout::Luma => ExtendedColorType::L8,
        PixelLayout::LumaAlpha => ExtendedColorType::La8,
        PixelLayout::Rgb => ExtendedColorType::Rgb8,
        PixelLayout::Rgba => ExtendedColorType::Rgba8,
    };

    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(raster.data(), raster.width(), raster.height(), color)
        .map_err(|e| ImaugError::Other(anyhow::Error::new(e).context("encode png")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
