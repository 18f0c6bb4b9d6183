//! Square lattice generator.
use crate::error::Result;
use crate::mesh::{check_distance, Mesh, MeshGenerator};
use crate::point::Point;

/// Axis-aligned lattice of squares with side `distance`, anchored at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareMesh;

impl SquareMesh {
    pub const NAME: &'static str = "square";
}

impl MeshGenerator for SquareMesh {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_mesh(&self, distance: f64, side_length: u32) -> Result<Mesh> {
        check_distance(distance, side_length)?;
        let side = f64::from(side_length);

        let mut out = Vec::new();
        let mut y = 0.0;
        while y <= side {
            let mut x = 0.0;
            while x <= side {
                out.push(Point::new(x, y));
                x += distance;
            }
            y += distance;
        }

        Ok(out)
    }
}
