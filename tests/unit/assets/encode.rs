use super::*;
use crate::assets::decode::decode_image;

#[test]
fn png_is_lossless_for_every_layout() {
    for (layout, px) in [
        (PixelLayout::Luma, vec![9u8]),
        (PixelLayout::LumaAlpha, vec![9, 200]),
        (PixelLayout::Rgb, vec![9, 8, 7]),
        (PixelLayout::Rgba, vec![9, 8, 7, 6]),
    ] {
        let raster = Raster::filled(3, 2, layout, &px).unwrap();
        let bytes = encode_png(&raster).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        assert_eq!(decode_image(&bytes).unwrap(), raster);
    }
}

#[test]
fn zero_area_raster_cannot_be_encoded() {
    let raster = Raster::new(0, 0, PixelLayout::Rgb, Vec::new()).unwrap();
    assert!(matches!(encode_png(&raster), Err(ImaugError::Transform(_))));
}
