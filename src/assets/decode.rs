use image::{ColorType, DynamicImage};

use crate::foundation::error::{ImaugError, ImaugResult};
use crate::foundation::raster::{PixelLayout, Raster};

/// File extensions accepted for uploads (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Decode encoded image bytes into an 8-bit [`Raster`], keeping the source channel count.
///
/// Wider sample types (16-bit, float) are narrowed to 8 bits per channel.
pub fn decode_image(bytes: &[u8]) -> ImaugResult<Raster> {
    if bytes.is_empty() {
        return Err(ImaugError::decode("input is empty"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ImaugError::decode(format!("decode image from memory: {e}")))?;
    raster_from_dynamic(dyn_img)
}

fn raster_from_dynamic(img: DynamicImage) -> ImaugResult<Raster> {
    let (width, height) = (img.width(), img.height());
    let (layout, data) = match img.color() {
        ColorType::L8 | ColorType::L16 => (PixelLayout::Luma, img.into_luma8().into_raw()),
        ColorType::La8 | ColorType::La16 => {
            (PixelLayout::LumaAlpha, img.into_luma_alpha8().into_raw())
        }
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => {
            (PixelLayout::Rgba, img.into_rgba8().into_raw())
        }
        _ => (PixelLayout::Rgb, img.into_rgb8().into_raw()),
    };
    Raster::new(width, height, layout, data)
}

/// Whether an upload name carries one of [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_upload(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        SUPPORTED_EXTENSIONS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(ext))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
