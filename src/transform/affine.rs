//! Affine helpers in pixel-index coordinates (`(0, 0)` is the center of the top-left pixel,
//! y grows downwards).

pub use kurbo::{Affine, Point, Vec2};

/// `a` after `b`.
#[inline]
pub fn compose(a: Affine, b: Affine) -> Affine {
    a * b
}

/// The identity mapping.
#[inline]
pub fn identity() -> Affine {
    Affine::IDENTITY
}

/// Center of a `width x height` grid.
pub fn center(width: u32, height: u32) -> Point {
    Point::new(
        (f64::from(width) - 1.0) * 0.5,
        (f64::from(height) - 1.0) * 0.5,
    )
}

/// Rotation by `degrees` about the grid center. Positive angles turn counter-clockwise as
/// displayed.
pub fn rotate_about_center(width: u32, height: u32, degrees: f64) -> Affine {
    Affine::rotate_about(-degrees.to_radians(), center(width, height))
}

/// Rotate and scale about the grid center, then shift by `(dx * width, dy * height)`.
pub fn shift_scale_rotate(
    width: u32,
    height: u32,
    degrees: f64,
    scale: f64,
    dx: f64,
    dy: f64,
) -> Affine {
    let c = center(width, height).to_vec2();
    let shift = Vec2::new(dx * f64::from(width), dy * f64::from(height));
    compose(
        Affine::translate(c + shift),
        compose(
            Affine::rotate(-degrees.to_radians()),
            compose(Affine::scale(scale), Affine::translate(-c)),
        ),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
