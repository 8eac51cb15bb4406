use super::*;
use crate::foundation::raster::PixelLayout;
use crate::transform::affine::{rotate_about_center, shift_scale_rotate};

fn gradient(w: u32, h: u32) -> Raster {
    let data = (0..h)
        .flat_map(|y| (0..w).flat_map(move |x| [(x * 10) as u8, (y * 10) as u8, 128]))
        .collect();
    Raster::new(w, h, PixelLayout::Rgb, data).unwrap()
}

#[test]
fn identity_is_exact_copy() {
    let src = gradient(7, 5);
    let out = warp_affine(&src, Affine::IDENTITY, BorderMode::Reflect101).unwrap();
    assert_eq!(out, src);
}

#[test]
fn constant_image_stays_constant_under_reflect() {
    let src = Raster::filled(20, 12, PixelLayout::Rgba, &[40, 80, 120, 255]).unwrap();
    let m = shift_scale_rotate(20, 12, 30.0, 0.9, 0.06, -0.05);
    let out = warp_affine(&src, m, BorderMode::Reflect101).unwrap();
    assert_eq!(out, src);
}

#[test]
fn integer_translation_moves_pixels() {
    let src = gradient(6, 4);
    let out = warp_affine(&src, Affine::translate((1.0, 0.0)), BorderMode::Constant).unwrap();
    assert_eq!(out.pixel(0, 0), &[0, 0, 0]);
    assert_eq!(out.pixel(1, 2), src.pixel(0, 2));
    assert_eq!(out.pixel(5, 3), src.pixel(4, 3));
}

#[test]
fn translation_border_modes_fill_differently() {
    let src = gradient(6, 4);
    let m = Affine::translate((2.0, 0.0));

    let reflect = warp_affine(&src, m, BorderMode::Reflect101).unwrap();
    assert_eq!(reflect.pixel(0, 1), src.pixel(2, 1));
    assert_eq!(reflect.pixel(1, 1), src.pixel(1, 1));

    let replicate = warp_affine(&src, m, BorderMode::Replicate).unwrap();
    assert_eq!(replicate.pixel(0, 1), src.pixel(0, 1));
    assert_eq!(replicate.pixel(1, 1), src.pixel(0, 1));
}

#[test]
fn rotation_keeps_size_and_center_pixel() {
    let src = gradient(9, 9);
    let out = warp_affine(&src, rotate_about_center(9, 9, 25.0), BorderMode::Reflect101).unwrap();
    assert_eq!(out.dimensions(), src.dimensions());
    assert_eq!(out.layout(), src.layout());
    assert_eq!(out.pixel(4, 4), src.pixel(4, 4));
}

#[test]
fn singular_matrix_is_rejected() {
    let src = gradient(3, 3);
    let err = warp_affine(&src, Affine::scale(0.0), BorderMode::Constant).unwrap_err();
    assert!(matches!(err, ImaugError::Transform(_)));
}

#[test]
fn zero_area_is_rejected() {
    let src = Raster::new(0, 3, PixelLayout::Rgb, Vec::new()).unwrap();
    let err = warp_affine(&src, Affine::scale(2.0), BorderMode::Reflect101).unwrap_err();
    assert!(matches!(err, ImaugError::Transform(_)));
}

#[test]
fn border_mode_serializes_snake_case() {
    let json = serde_json::to_string(&BorderMode::Reflect101).unwrap();
    assert_eq!(json, "\"reflect101\"");
    let mode: BorderMode = serde_json::from_str("\"constant\"").unwrap();
    assert_eq!(mode, BorderMode::Constant);
}
