//! Idealized ligand-direction layouts, one per geometry.
//!
//! Consumed by external renderers: each geometry maps to the ordered
//! direction vectors at which its bonded ligands sit around a center at
//! the origin. Vector count equals the geometry's bonded-ligand count, so
//! `Spherical` (a bare atom) maps to the empty slice. Directions are not
//! normalized; renderers scale them to bond length as needed.
//!
//! Every [`MolecularGeometry`] variant has an entry here. The shape engine
//! relies on that: any geometry it emits is drawable.

use crate::core::models::geometry::MolecularGeometry;
use nalgebra::Vector3;

static SPHERICAL: [Vector3<f64>; 0] = [];

static LINEAR: [Vector3<f64>; 2] = [Vector3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, -2.0)];

static TRIGONAL_PLANAR: [Vector3<f64>; 3] = [
    Vector3::new(0.0, 2.0, 0.0),
    Vector3::new(1.732, -1.0, 0.0),
    Vector3::new(-1.732, -1.0, 0.0),
];

static BENT_TRIGONAL: [Vector3<f64>; 2] = [
    Vector3::new(1.732, -1.0, 0.0),
    Vector3::new(-1.732, -1.0, 0.0),
];

static TETRAHEDRAL: [Vector3<f64>; 4] = [
    Vector3::new(1.0, 1.0, 1.0),
    Vector3::new(1.0, -1.0, -1.0),
    Vector3::new(-1.0, 1.0, -1.0),
    Vector3::new(-1.0, -1.0, 1.0),
];

static TRIGONAL_PYRAMIDAL: [Vector3<f64>; 3] = [
    Vector3::new(1.0, 1.0, -1.0),
    Vector3::new(-1.0, 1.0, -1.0),
    Vector3::new(0.0, -1.0, 1.0),
];

static BENT_TETRAHEDRAL: [Vector3<f64>; 2] =
    [Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, -1.0, -1.0)];

static TRIGONAL_BIPYRAMIDAL: [Vector3<f64>; 5] = [
    Vector3::new(0.0, 0.0, 2.0),
    Vector3::new(0.0, 0.0, -2.0),
    Vector3::new(1.732, -1.0, 0.0),
    Vector3::new(-1.732, -1.0, 0.0),
    Vector3::new(0.0, 2.0, 0.0),
];

static SEESAW: [Vector3<f64>; 4] = [
    Vector3::new(0.0, 0.0, 2.0),
    Vector3::new(0.0, 0.0, -2.0),
    Vector3::new(1.732, -1.0, 0.0),
    Vector3::new(-1.732, -1.0, 0.0),
];

static T_SHAPED: [Vector3<f64>; 3] = [
    Vector3::new(0.0, 0.0, 2.0),
    Vector3::new(1.732, -1.0, 0.0),
    Vector3::new(-1.732, -1.0, 0.0),
];

static OCTAHEDRAL: [Vector3<f64>; 6] = [
    Vector3::new(1.0, 0.0, 0.0),
    Vector3::new(-1.0, 0.0, 0.0),
    Vector3::new(0.0, 1.0, 0.0),
    Vector3::new(0.0, -1.0, 0.0),
    Vector3::new(0.0, 0.0, 1.0),
    Vector3::new(0.0, 0.0, -1.0),
];

static SQUARE_PYRAMIDAL: [Vector3<f64>; 5] = [
    Vector3::new(1.0, 0.0, 0.0),
    Vector3::new(-1.0, 0.0, 0.0),
    Vector3::new(0.0, 1.0, 0.0),
    Vector3::new(0.0, -1.0, 0.0),
    Vector3::new(0.0, 0.0, 1.0),
];

static SQUARE_PLANAR: [Vector3<f64>; 4] = [
    Vector3::new(1.0, 0.0, 0.0),
    Vector3::new(-1.0, 0.0, 0.0),
    Vector3::new(0.0, 1.0, 0.0),
    Vector3::new(0.0, -1.0, 0.0),
];

// Axial pair plus a regular pentagon in the equatorial plane.
static PENTAGONAL_BIPYRAMIDAL: [Vector3<f64>; 7] = [
    Vector3::new(0.0, 0.0, 2.0),
    Vector3::new(0.0, 0.0, -2.0),
    Vector3::new(0.0, 2.0, 0.0),
    Vector3::new(-1.902, 0.618, 0.0),
    Vector3::new(-1.176, -1.618, 0.0),
    Vector3::new(1.176, -1.618, 0.0),
    Vector3::new(1.902, 0.618, 0.0),
];

/// The ordered ligand directions for `geometry`.
pub fn ligand_directions(geometry: MolecularGeometry) -> &'static [Vector3<f64>] {
    match geometry {
        MolecularGeometry::Spherical => &SPHERICAL,
        MolecularGeometry::Linear => &LINEAR,
        MolecularGeometry::TrigonalPlanar => &TRIGONAL_PLANAR,
        MolecularGeometry::BentTrigonal => &BENT_TRIGONAL,
        MolecularGeometry::Tetrahedral => &TETRAHEDRAL,
        MolecularGeometry::TrigonalPyramidal => &TRIGONAL_PYRAMIDAL,
        MolecularGeometry::BentTetrahedral => &BENT_TETRAHEDRAL,
        MolecularGeometry::TrigonalBipyramidal => &TRIGONAL_BIPYRAMIDAL,
        MolecularGeometry::Seesaw => &SEESAW,
        MolecularGeometry::TShaped => &T_SHAPED,
        MolecularGeometry::Octahedral => &OCTAHEDRAL,
        MolecularGeometry::SquarePyramidal => &SQUARE_PYRAMIDAL,
        MolecularGeometry::SquarePlanar => &SQUARE_PLANAR,
        MolecularGeometry::PentagonalBipyramidal => &PENTAGONAL_BIPYRAMIDAL,
    }
}
