use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn center_is_between_middle_pixels() {
    assert_eq!(center(4, 3), Point::new(1.5, 1.0));
    assert_eq!(center(1, 1), Point::new(0.0, 0.0));
}

#[test]
fn rotation_keeps_center_fixed() {
    let m = rotate_about_center(10, 6, 33.0);
    assert!(close(m * center(10, 6), center(10, 6)));
}

#[test]
fn positive_rotation_is_counter_clockwise_on_screen() {
    // A point to the right of the center moves up (smaller y) under +90 degrees.
    let m = rotate_about_center(11, 11, 90.0);
    let p = m * Point::new(10.0, 5.0);
    assert!(close(p, Point::new(5.0, 0.0)));
}

#[test]
fn shift_scale_rotate_without_params_is_identity() {
    let m = shift_scale_rotate(8, 8, 0.0, 1.0, 0.0, 0.0);
    let p = Point::new(2.0, 7.0);
    assert!(close(m * p, p));
    assert!(close(identity() * p, p));
}

#[test]
fn shift_is_relative_to_size_and_scale_to_center() {
    let m = shift_scale_rotate(100, 50, 0.0, 1.0, 0.1, -0.2);
    assert!(close(m * Point::new(0.0, 0.0), Point::new(10.0, -10.0)));

    let m = shift_scale_rotate(5, 5, 0.0, 2.0, 0.0, 0.0);
    assert!(close(m * Point::new(3.0, 2.0), Point::new(4.0, 2.0)));
}
