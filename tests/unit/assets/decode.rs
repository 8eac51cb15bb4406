use std::io::Cursor;

use super::*;

fn encode(img: DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn decode_png_keeps_rgb_layout_and_pixels() {
    let img = image::RgbImage::from_raw(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
    let bytes = encode(DynamicImage::ImageRgb8(img), image::ImageFormat::Png);

    let raster = decode_image(&bytes).unwrap();
    assert_eq!(raster.dimensions(), (2, 1));
    assert_eq!(raster.layout(), PixelLayout::Rgb);
    assert_eq!(raster.data(), &[10, 20, 30, 40, 50, 60]);
}

#[test]
fn decode_png_keeps_alpha_and_gray_layouts() {
    let rgba = image::RgbaImage::from_raw(1, 1, vec![1, 2, 3, 128]).unwrap();
    let raster = decode_image(&encode(
        DynamicImage::ImageRgba8(rgba),
        image::ImageFormat::Png,
    ))
    .unwrap();
    assert_eq!(raster.layout(), PixelLayout::Rgba);
    assert_eq!(raster.data(), &[1, 2, 3, 128]);

    let gray = image::GrayImage::from_raw(1, 1, vec![77]).unwrap();
    let raster = decode_image(&encode(
        DynamicImage::ImageLuma8(gray),
        image::ImageFormat::Png,
    ))
    .unwrap();
    assert_eq!(raster.layout(), PixelLayout::Luma);
}

#[test]
fn decode_jpeg_yields_rgb() {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50]));
    let bytes = encode(DynamicImage::ImageRgb8(img), image::ImageFormat::Jpeg);
    let raster = decode_image(&bytes).unwrap();
    assert_eq!(raster.dimensions(), (8, 8));
    assert_eq!(raster.layout(), PixelLayout::Rgb);
}

#[test]
fn empty_and_garbage_bytes_are_decode_errors() {
    assert!(matches!(decode_image(&[]), Err(ImaugError::Decode(_))));
    assert!(matches!(
        decode_image(b"definitely not an image"),
        Err(ImaugError::Decode(_))
    ));
}

#[test]
fn supported_upload_extensions() {
    assert!(is_supported_upload("cat.png"));
    assert!(is_supported_upload("a.JPG"));
    assert!(is_supported_upload("photo.v2.jpeg"));
    assert!(!is_supported_upload("notes.txt"));
    assert!(!is_supported_upload("png"));
    assert!(!is_supported_upload("anim.gif"));
}
