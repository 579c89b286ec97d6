//! Hand-curated answers for well-known molecules.
//!
//! General electron-counting heuristics misclassify several textbook
//! species (resonance-averaged structures, expanded octets); this table
//! hard-codes trusted answers for them and takes precedence over the
//! heuristic stages.

use super::{ShapeQuery, ShapeResolver};
use crate::core::models::composition::Composition;
use crate::core::models::geometry::MolecularGeometry;
use crate::core::models::shape::ShapeResult;
use crate::engine::error::ShapeError;
use phf::{Map, phf_map};

pub struct SpecialCase {
    pub geometry: MolecularGeometry,
    pub lone_pairs: u32,
    pub center_atom: &'static str,
    /// Canonical stoichiometry, used when the caller's formula string did
    /// not survive parsing (e.g. nonstandard casing).
    atoms: &'static [(&'static str, u32)],
}

const fn case(
    geometry: MolecularGeometry,
    lone_pairs: u32,
    center_atom: &'static str,
    atoms: &'static [(&'static str, u32)],
) -> SpecialCase {
    SpecialCase {
        geometry,
        lone_pairs,
        center_atom,
        atoms,
    }
}

/// Lowercased formula → pre-resolved shape.
#[rustfmt::skip]
pub static SPECIAL_CASES: Map<&'static str, SpecialCase> = phf_map! {
    "h2o"   => case(MolecularGeometry::BentTetrahedral, 2, "O", &[("H", 2), ("O", 1)]),
    "nh3"   => case(MolecularGeometry::TrigonalPyramidal, 1, "N", &[("H", 3), ("N", 1)]),
    "ch4"   => case(MolecularGeometry::Tetrahedral, 0, "C", &[("C", 1), ("H", 4)]),
    "co2"   => case(MolecularGeometry::Linear, 0, "C", &[("C", 1), ("O", 2)]),
    "so2"   => case(MolecularGeometry::BentTrigonal, 1, "S", &[("O", 2), ("S", 1)]),
    "so3"   => case(MolecularGeometry::TrigonalPlanar, 0, "S", &[("O", 3), ("S", 1)]),
    "h2so4" => case(MolecularGeometry::Tetrahedral, 0, "S", &[("H", 2), ("O", 4), ("S", 1)]),
    "h3po4" => case(MolecularGeometry::Tetrahedral, 0, "P", &[("H", 3), ("O", 4), ("P", 1)]),
    "hno3"  => case(MolecularGeometry::TrigonalPlanar, 0, "N", &[("H", 1), ("N", 1), ("O", 3)]),
    "o3"    => case(MolecularGeometry::BentTrigonal, 1, "O", &[("O", 3)]),
    "pcl5"  => case(MolecularGeometry::TrigonalBipyramidal, 0, "P", &[("Cl", 5), ("P", 1)]),
    "sf6"   => case(MolecularGeometry::Octahedral, 0, "S", &[("F", 6), ("S", 1)]),
    "pf5"   => case(MolecularGeometry::TrigonalBipyramidal, 0, "P", &[("F", 5), ("P", 1)]),
    "sf4"   => case(MolecularGeometry::Seesaw, 1, "S", &[("F", 4), ("S", 1)]),
    "clf3"  => case(MolecularGeometry::TShaped, 2, "Cl", &[("Cl", 1), ("F", 3)]),
    "brf5"  => case(MolecularGeometry::SquarePyramidal, 1, "Br", &[("Br", 1), ("F", 5)]),
    "xef2"  => case(MolecularGeometry::Linear, 3, "Xe", &[("F", 2), ("Xe", 1)]),
    "xef4"  => case(MolecularGeometry::SquarePlanar, 2, "Xe", &[("F", 4), ("Xe", 1)]),
    "if7"   => case(MolecularGeometry::PentagonalBipyramidal, 0, "I", &[("F", 7), ("I", 1)]),
};

impl SpecialCase {
    pub fn canonical_composition(&self) -> Composition {
        self.atoms
            .iter()
            .map(|(element, count)| (element.to_string(), *count))
            .collect()
    }
}

fn lookup(formula: &str) -> Option<&'static SpecialCase> {
    SPECIAL_CASES.get(formula.trim().to_ascii_lowercase().as_str())
}

/// Resolves a formula the parser rejected, matching purely on the
/// lowercased string and reconstructing the composition from the table.
pub(crate) fn resolve_unparsed(formula: &str) -> Option<ShapeResult> {
    let case = lookup(formula)?;
    Some(ShapeResult::new(
        case.geometry,
        case.lone_pairs,
        case.canonical_composition(),
        case.center_atom,
    ))
}

pub struct SpecialCaseResolver;

impl ShapeResolver for SpecialCaseResolver {
    fn name(&self) -> &'static str {
        "special-case"
    }

    fn try_resolve(&self, query: &ShapeQuery) -> Result<Option<ShapeResult>, ShapeError> {
        let Some(case) = lookup(query.formula) else {
            return Ok(None);
        };
        Ok(Some(ShapeResult::new(
            case.geometry,
            case.lone_pairs,
            query.composition.clone(),
            case.center_atom,
        )))
    }
}
