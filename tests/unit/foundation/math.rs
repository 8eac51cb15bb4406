use super::*;

#[test]
fn reflect_101_mirrors_without_repeating_edge() {
    let got: Vec<i64> = (-3..7).map(|i| reflect_101(i, 4)).collect();
    assert_eq!(got, vec![3, 2, 1, 0, 1, 2, 3, 2, 1, 0]);
}

#[test]
fn reflect_101_single_pixel_axis_is_zero() {
    for i in -5..5 {
        assert_eq!(reflect_101(i, 1), 0);
    }
}

#[test]
fn replicate_clamps_to_edges() {
    assert_eq!(replicate(-2, 5), 0);
    assert_eq!(replicate(3, 5), 3);
    assert_eq!(replicate(9, 5), 4);
}

#[test]
fn round_to_u8_saturates() {
    assert_eq!(round_to_u8(-4.0), 0);
    assert_eq!(round_to_u8(127.5), 128);
    assert_eq!(round_to_u8(300.0), 255);
}
