use kurbo::{Affine, Point};

use crate::foundation::error::{ImaugError, ImaugResult};
use crate::foundation::math::{reflect_101, replicate, round_to_u8};
use crate::foundation::raster::Raster;

/// How samples that fall outside the source grid are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Mirror around the edge pixel without repeating it.
    #[default]
    Reflect101,
    /// Repeat the edge pixel.
    Replicate,
    /// Fill with zeros (transparent when the layout has alpha).
    Constant,
}

/// Resample `src` through the forward mapping `forward` (source -> destination pixel
/// coordinates) using bilinear interpolation. The output has the size of the input.
pub fn warp_affine(src: &Raster, forward: Affine, border: BorderMode) -> ImaugResult<Raster> {
    src.ensure_non_degenerate("affine warp")?;
    if forward == Affine::IDENTITY {
        return Ok(src.clone());
    }

    let det = forward.determinant();
    if !det.is_finite() || det.abs() < 1e-12 {
        return Err(ImaugError::transform(format!(
            "affine transform is not invertible (determinant {det})"
        )));
    }
    let inverse = forward.inverse();

    let (w, h) = (i64::from(src.width()), i64::from(src.height()));
    let c = src.layout().channels();
    let stride = src.stride();
    let data = src.data();

    let mut out = vec![0u8; data.len()];
    let mut acc = [0f64; 4];
    for y in 0..h {
        for x in 0..w {
            let p = inverse * Point::new(x as f64, y as f64);
            let (x0, y0) = (p.x.floor(), p.y.floor());
            let (fx, fy) = (p.x - x0, p.y - y0);
            let (x0, y0) = (x0 as i64, y0 as i64);

            acc[..c].fill(0.0);
            let taps = [
                (x0, y0, (1.0 - fx) * (1.0 - fy)),
                (x0 + 1, y0, fx * (1.0 - fy)),
                (x0, y0 + 1, (1.0 - fx) * fy),
                (x0 + 1, y0 + 1, fx * fy),
            ];
            for (sx, sy, weight) in taps {
                if weight == 0.0 {
                    continue;
                }
                let Some((sx, sy)) = resolve(sx, sy, w, h, border) else {
                    continue;
                };
                let idx = sy as usize * stride + sx as usize * c;
                for (a, &v) in acc[..c].iter_mut().zip(&data[idx..idx + c]) {
                    *a += weight * f64::from(v);
                }
            }

            let out_idx = y as usize * stride + x as usize * c;
            for (o, &a) in out[out_idx..out_idx + c].iter_mut().zip(&acc[..c]) {
                *o = round_to_u8(a);
            }
        }
    }

    Raster::new(src.width(), src.height(), src.layout(), out)
}

fn resolve(x: i64, y: i64, w: i64, h: i64, border: BorderMode) -> Option<(i64, i64)> {
    if (0..w).contains(&x) && (0..h).contains(&y) {
        return Some((x, y));
    }
    match border {
        BorderMode::Reflect101 => Some((reflect_101(x, w), reflect_101(y, h))),
        BorderMode::Replicate => Some((replicate(x, w), replicate(y, h))),
        BorderMode::Constant => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/warp.rs"]
mod tests;
