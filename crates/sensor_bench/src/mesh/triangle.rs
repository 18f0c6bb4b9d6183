//! Triangular lattice generator.
use crate::error::Result;
use crate::mesh::{check_distance, triangle_height, Mesh, MeshGenerator};
use crate::point::Point;

/// Lattice of equilateral triangles with side `distance`.
///
/// Rows are `distance * sqrt(3) / 2` apart; every odd row is shifted right by half a spacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleMesh;

impl TriangleMesh {
    pub const NAME: &'static str = "triangle";
}

impl MeshGenerator for TriangleMesh {
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
            let mut x = if odd { distance / 2.0 } else { 0.0 };
            while x <= side {
                out.push(Point::new(x, y));
                x += distance;
            }
            y += h;
            odd = !odd;
        }

        Ok(out)
    }
}
