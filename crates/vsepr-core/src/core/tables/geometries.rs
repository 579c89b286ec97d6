//! The VSEPR geometry dictionary: (steric number, lone pairs) → geometry.

use crate::core::models::geometry::MolecularGeometry;

/// Tabulated `(lone_pairs, geometry)` pairs for each steric number 1–7,
/// in ascending lone-pair order. Only valid combinations are populated.
#[rustfmt::skip]
static GEOMETRY_TABLE: [&[(u32, MolecularGeometry)]; 7] = [
    // steric 1
    &[(0, MolecularGeometry::Spherical)],
    // steric 2
    &[(0, MolecularGeometry::Linear)],
    // steric 3
    &[(0, MolecularGeometry::TrigonalPlanar), (1, MolecularGeometry::BentTrigonal)],
    // steric 4
    &[
        (0, MolecularGeometry::Tetrahedral),
        (1, MolecularGeometry::TrigonalPyramidal),
        (2, MolecularGeometry::BentTetrahedral),
    ],
    // steric 5
    &[
        (0, MolecularGeometry::TrigonalBipyramidal),
        (1, MolecularGeometry::Seesaw),
        (2, MolecularGeometry::TShaped),
        (3, MolecularGeometry::Linear),
    ],
    // steric 6
    &[
        (0, MolecularGeometry::Octahedral),
        (1, MolecularGeometry::SquarePyramidal),
        (2, MolecularGeometry::SquarePlanar),
        (3, MolecularGeometry::TShaped),
        (4, MolecularGeometry::Linear),
    ],
    // steric 7
    &[(0, MolecularGeometry::PentagonalBipyramidal)],
];

/// The tabulated lone-pair variants for `steric_number`, or `None` when the
/// steric number is outside 1–7.
pub fn tabulated_variants(steric_number: u32) -> Option<&'static [(u32, MolecularGeometry)]> {
    if !(1..=7).contains(&steric_number) {
        return None;
    }
    Some(GEOMETRY_TABLE[(steric_number - 1) as usize])
}

/// Looks up the geometry for `(steric_number, lone_pairs)`.
///
/// When the exact lone-pair count is not tabulated for that steric number,
/// the tabulated count nearest to the requested one is selected instead,
/// ties broken toward the smaller value. The returned pair is the geometry
/// together with the lone-pair count actually used, so callers can report
/// the adjusted value. Returns `None` only for steric numbers outside 1–7.
pub fn geometry_for(steric_number: u32, lone_pairs: u32) -> Option<(MolecularGeometry, u32)> {
    let variants = tabulated_variants(steric_number)?;
    let nearest = variants
        .iter()
        .min_by_key(|(tabulated, _)| tabulated.abs_diff(lone_pairs))?;
    Some((nearest.1, nearest.0))
}
