/// Map an out-of-range coordinate back into `0..len` by mirroring around the edge pixel
/// without repeating it (`... c b | a b c d | c b ...`).
pub(crate) fn reflect_101(i: i64, len: i64) -> i64 {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let m = i.rem_euclid(period);
    if m < len { m } else { period - m }
}

/// Clamp an out-of-range coordinate to the nearest edge pixel.
pub(crate) fn replicate(i: i64, len: i64) -> i64 {
    i.clamp(0, len - 1)
}

pub(crate) fn round_to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
