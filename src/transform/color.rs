use crate::foundation::error::ImaugResult;
use crate::foundation::math::round_to_u8;
use crate::foundation::raster::Raster;

/// Linear brightness/contrast adjustment: `v * (1 + contrast) + brightness * 255`,
/// saturated to `0..=255`. Alpha is left as-is.
pub fn brightness_contrast(src: &Raster, brightness: f64, contrast: f64) -> ImaugResult<Raster> {
    let lut = build_lut(brightness, contrast);
    let layout = src.layout();
    let (c, color) = (layout.channels(), layout.color_channels());

    let mut out = src.data().to_vec();
    for px in out.chunks_exact_mut(c) {
        for v in &mut px[..color] {
            *v = lut[*v as usize];
        }
    }
    Raster::new(src.width(), src.height(), layout, out)
}

fn build_lut(brightness: f64, contrast: f64) -> [u8; 256] {
    let alpha = 1.0 + contrast;
    let beta = brightness * 255.0;
    std::array::from_fn(|v| round_to_u8(v as f64 * alpha + beta))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/color.rs"]
mod tests;
