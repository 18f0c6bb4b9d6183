//! Lattice generators enumerating candidate POI positions.
//!
//! A [`MeshGenerator`] maps a node spacing and a square region side length to the full,
//! un-thinned lattice. Generation is pure: no randomness and no state, so one mesh can be
//! shared by every instance of a run. Random exclusion happens later in
//! [`crate::generator`].
//!
//! Coordinates advance by repeated addition rather than index multiplication. Boundary
//! inclusion at `side_length` therefore depends on the accumulated rounding, and all
//! generators keep that order so results stay bit-for-bit stable.
use crate::error::{Error, Result};
use crate::point::Point;

pub mod honeycomb;
pub mod square;
pub mod triangle;

pub use honeycomb::HoneycombMesh;
pub use square::SquareMesh;
pub use triangle::TriangleMesh;

/// Ordered lattice points; every point lies within `[0, side_length]` on both axes.
pub type Mesh = Vec<Point>;

/// Trait for lattice generation.
pub trait MeshGenerator: Send + Sync {
    /// Name under which the generator is registered.
    fn name(&self) -> &'static str;

    /// Enumerates every lattice point within `[0, side_length] x [0, side_length]`.
    ///
    /// Fails with [`Error::InvalidParameter`] when `distance` is not a positive finite value
    /// or `side_length / distance` exceeds [`MAX_STEPS_PER_AXIS`].
    fn create_mesh(&self, distance: f64, side_length: u32) -> Result<Mesh>;
}

/// Upper bound on `side_length / distance` accepted by every mesh generator.
///
/// Below this ratio each `+= distance` step moves the coordinate, so lattice loops terminate.
pub const MAX_STEPS_PER_AXIS: f64 = 1_000_000.0;

/// Rejects spacings that would never advance the lattice.
pub(crate) fn check_distance(distance: f64, side_length: u32) -> Result<()> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "mesh distance must be a positive finite number, got {distance}"
        )));
    }
    let steps = f64::from(side_length) / distance;
    if steps > MAX_STEPS_PER_AXIS {
        return Err(Error::InvalidParameter(format!(
            "mesh distance {distance} is too small for side length {side_length}: \
             {steps:.0} steps per axis exceed {MAX_STEPS_PER_AXIS}"
        )));
    }
    Ok(())
}

/// Row height of a lattice made of equilateral triangles with side `distance`.
#[inline]
pub(crate) fn triangle_height(distance: f64) -> f64 {
    distance * 3.0_f64.sqrt() / 2.0
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_distance_rejects_non_positive_and_non_finite() {
        assert!(check_distance(0.5, 100).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                check_distance(bad, 100),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn check_distance_bounds_steps_per_axis() {
        assert!(check_distance(0.001, 1000).is_ok());
        assert!(check_distance(1e-5, 1).is_ok());
        assert!(check_distance(1e-17, 0).is_ok());
        assert!(matches!(
            check_distance(1e-7, 1),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn every_generator_rejects_vanishing_distance() {
        let generators: [&dyn MeshGenerator; 3] = [&SquareMesh, &TriangleMesh, &HoneycombMesh];
        for g in generators {
            assert!(
                matches!(g.create_mesh(1e-17, 1), Err(Error::InvalidParameter(_))),
                "{} accepted 1e-17",
                g.name()
            );
        }
    }

    #[test]
    fn triangle_height_matches_equilateral_geometry() {
        let h = triangle_height(10.0);
        assert!((h - 8.660_254_037_844_386).abs() < 1e-12);
    }

    #[test]
    fn every_generator_rejects_zero_distance() {
        let generators: [&dyn MeshGenerator; 3] = [&SquareMesh, &TriangleMesh, &HoneycombMesh];
        for g in generators {
            assert!(g.create_mesh(0.0, 100).is_err(), "{} accepted 0", g.name());
        }
    }

    #[test]
    fn every_generator_stays_inside_the_region() {
        let generators: [&dyn MeshGenerator; 3] = [&SquareMesh, &TriangleMesh, &HoneycombMesh];
        for g in generators {
            let mesh = g.create_mesh(7.3, 250).expect("valid parameters");
            assert!(!mesh.is_empty());
            assert!(
                mesh.iter().all(|p| p.is_within(250.0)),
                "{} produced a point outside the region",
                g.name()
            );
        }
    }

    #[test]
    fn zero_side_length_yields_only_the_origin() {
        let generators: [&dyn MeshGenerator; 3] = [&SquareMesh, &TriangleMesh, &HoneycombMesh];
        for g in generators {
            let mesh = g.create_mesh(1.0, 0).expect("valid parameters");
            assert_eq!(mesh, vec![Point::ORIGIN], "{}", g.name());
        }
    }
}
