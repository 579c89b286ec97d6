use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed vocabulary of idealized molecular geometries the engine can
/// name.
///
/// Every variant has a matching entry in the ligand-direction layout
/// ([`ligand_directions`](crate::core::tables::layout::ligand_directions)),
/// so any geometry the engine returns is guaranteed to be drawable by a
/// renderer. Adding a variant here requires adding matching layout data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MolecularGeometry {
    /// A bare atom or monatomic ion with no surrounding ligands.
    Spherical,
    Linear,
    TrigonalPlanar,
    /// Bent, derived from a trigonal planar electron arrangement (~120°).
    BentTrigonal,
    Tetrahedral,
    TrigonalPyramidal,
    /// Bent, derived from a tetrahedral electron arrangement (~109.5°).
    BentTetrahedral,
    TrigonalBipyramidal,
    Seesaw,
    TShaped,
    Octahedral,
    SquarePyramidal,
    SquarePlanar,
    PentagonalBipyramidal,
}

impl MolecularGeometry {
    /// Every geometry, in steric-number order. Used by completeness checks.
    pub const ALL: [MolecularGeometry; 14] = [
        MolecularGeometry::Spherical,
        MolecularGeometry::Linear,
        MolecularGeometry::TrigonalPlanar,
        MolecularGeometry::BentTrigonal,
        MolecularGeometry::Tetrahedral,
        MolecularGeometry::TrigonalPyramidal,
        MolecularGeometry::BentTetrahedral,
        MolecularGeometry::TrigonalBipyramidal,
        MolecularGeometry::Seesaw,
        MolecularGeometry::TShaped,
        MolecularGeometry::Octahedral,
        MolecularGeometry::SquarePyramidal,
        MolecularGeometry::SquarePlanar,
        MolecularGeometry::PentagonalBipyramidal,
    ];

    /// The conventional display name, e.g. `"Bent (Tetrahedral)"`.
    pub fn name(&self) -> &'static str {
        match self {
            MolecularGeometry::Spherical => "Spherical",
            MolecularGeometry::Linear => "Linear",
            MolecularGeometry::TrigonalPlanar => "Trigonal planar",
            MolecularGeometry::BentTrigonal => "Bent (Trigonal)",
            MolecularGeometry::Tetrahedral => "Tetrahedral",
            MolecularGeometry::TrigonalPyramidal => "Trigonal pyramidal",
            MolecularGeometry::BentTetrahedral => "Bent (Tetrahedral)",
            MolecularGeometry::TrigonalBipyramidal => "Trigonal bipyramidal",
            MolecularGeometry::Seesaw => "Seesaw",
            MolecularGeometry::TShaped => "T-shaped",
            MolecularGeometry::Octahedral => "Octahedral",
            MolecularGeometry::SquarePyramidal => "Square pyramidal",
            MolecularGeometry::SquarePlanar => "Square planar",
            MolecularGeometry::PentagonalBipyramidal => "Pentagonal bipyramidal",
        }
    }
}

impl fmt::Display for MolecularGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MolecularGeometry {
    type Err = ();

    /// Parses a display name back into a geometry (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        MolecularGeometry::ALL
            .into_iter()
            .find(|g| g.name().to_ascii_lowercase() == lowered)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_match_conventional_spelling() {
        assert_eq!(MolecularGeometry::BentTetrahedral.to_string(), "Bent (Tetrahedral)");
        assert_eq!(MolecularGeometry::TShaped.to_string(), "T-shaped");
        assert_eq!(
            MolecularGeometry::TrigonalBipyramidal.to_string(),
            "Trigonal bipyramidal"
        );
    }

    #[test]
    fn all_contains_every_variant_exactly_once() {
        let mut names: Vec<&str> = MolecularGeometry::ALL.iter().map(|g| g.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn from_str_round_trips_every_display_name() {
        for geometry in MolecularGeometry::ALL {
            assert_eq!(geometry.name().parse::<MolecularGeometry>(), Ok(geometry));
        }
    }

    #[test]
    fn from_str_is_case_insensitive_and_trims() {
        assert_eq!(" t-shaped ".parse::<MolecularGeometry>(), Ok(MolecularGeometry::TShaped));
        assert_eq!(
            "SQUARE PLANAR".parse::<MolecularGeometry>(),
            Ok(MolecularGeometry::SquarePlanar)
        );
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        assert_eq!("Hexagonal".parse::<MolecularGeometry>(), Err(()));
        assert_eq!("".parse::<MolecularGeometry>(), Err(()));
    }
}
