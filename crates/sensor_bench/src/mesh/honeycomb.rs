//! Honeycomb lattice generator.
use crate::error::Result;
use crate::mesh::{check_distance, triangle_height, Mesh, MeshGenerator};
use crate::point::Point;

/// Lattice of regular hexagons with side `distance`.
///
/// Built on the triangular lattice of [`crate::mesh::TriangleMesh`], dropping every third
/// column of each row. The column counter starts at 2 on unshifted rows and at 1 on shifted
/// rows, which lines the gaps up into hexagon centers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoneycombMesh;

impl HoneycombMesh {
    pub const NAME: &'static str = "honeycomb";
}

impl MeshGenerator for HoneycombMesh {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_mesh(&self, distance: f64, side_length: u32) -> Result<Mesh> {
        check_distance(distance, side_length)?;
        let side = f64::from(side_length);
        let h = triangle_height(distance);

        let mut out = Vec::new();
        let mut odd = false;
        let mut y = 0.0;
        while y <= side {
            let mut column: u64 = if odd { 1 } else { 2 };
            let mut x = if odd { distance / 2.0 } else { 0.0 };
            while x <= side {
                if column % 3 != 0 {
                    out.push(Point::new(x, y));
                }
                x += distance;
                column += 1;
            }
            y += h;
            odd = !odd;
        }

        Ok(out)
    }
}
