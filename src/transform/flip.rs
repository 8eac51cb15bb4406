use crate::foundation::error::ImaugResult;
use crate::foundation::raster::Raster;

/// Mirror the columns of every row.
pub fn flip_horizontal(src: &Raster) -> ImaugResult<Raster> {
    let c = src.layout().channels();
    let stride = src.stride();
    let mut out = Vec::with_capacity(src.data().len());
    if stride > 0 {
        for row in src.data().chunks_exact(stride) {
            for px in row.chunks_exact(c).rev() {
                out.extend_from_slice(px);
            }
        }
    }
    Raster::new(src.width(), src.height(), src.layout(), out)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/flip.rs"]
mod tests;
