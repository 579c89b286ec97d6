//! The shape inference engine.
//!
//! [`infer_shape`] is the library's main entry point: it parses the formula
//! into a [`Composition`](crate::core::models::composition::Composition)
//! and walks the resolver chain until one stage produces a
//! [`ShapeResult`]. The whole pipeline is a pure function of its input and
//! the static tables; it is safe to call from multiple threads without
//! coordination.

pub mod error;
pub mod resolvers;

pub use error::ShapeError;

use crate::core::formula::parse_formula;
use crate::core::models::shape::ShapeResult;
use resolvers::diatomic::DiatomicResolver;
use resolvers::heuristic::HeuristicResolver;
use resolvers::single_atom::SingleAtomResolver;
use resolvers::special_cases::SpecialCaseResolver;
use resolvers::{ShapeQuery, ShapeResolver};
use tracing::debug;

/// The fixed priority order in which resolution strategies are tried.
static RESOLVER_CHAIN: [&(dyn ShapeResolver); 4] = [
    &SingleAtomResolver,
    &SpecialCaseResolver,
    &DiatomicResolver,
    &HeuristicResolver,
];

/// Infers the idealized molecular geometry for a chemical formula.
///
/// # Errors
///
/// - [`ShapeError::UnknownElement`] when the formula uses an element
///   outside the supported valence table.
/// - [`ShapeError::UnsupportedMolecule`] when the formula does not parse,
///   or its steric number exceeds the model's geometric vocabulary with no
///   hypervalent recovery.
///
/// # Example
///
/// ```
/// use vsepr::engine::infer_shape;
///
/// let water = infer_shape("H2O").unwrap();
/// assert_eq!(water.geometry.to_string(), "Bent (Tetrahedral)");
/// assert_eq!(water.lone_pairs, 2);
/// ```
pub fn infer_shape(formula: &str) -> Result<ShapeResult, ShapeError> {
    let composition = match parse_formula(formula) {
        Ok(composition) => composition,
        Err(parse_error) => {
            // A formula the parser rejects can still be a known molecule
            // written in nonstandard casing (e.g. "ch4").
            if let Some(result) = resolvers::special_cases::resolve_unparsed(formula) {
                debug!(formula, "resolved unparseable formula from the special-case table");
                return Ok(result);
            }
            debug!(formula, %parse_error, "formula did not parse");
            return Err(ShapeError::UnsupportedMolecule(formula.to_string()));
        }
    };

    let query = ShapeQuery {
        formula,
        composition: &composition,
    };
    for resolver in RESOLVER_CHAIN {
        if let Some(result) = resolver.try_resolve(&query)? {
            debug!(
                formula,
                resolver = resolver.name(),
                geometry = %result.geometry,
                lone_pairs = result.lone_pairs,
                center = %result.center_atom,
                "shape resolved"
            );
            return Ok(result);
        }
    }

    // The heuristic resolver always concludes; this is unreachable in
    // practice but kept as an explicit failure rather than a panic.
    Err(ShapeError::UnsupportedMolecule(formula.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::geometry::MolecularGeometry;
    use crate::core::tables::layout::ligand_directions;

    #[test]
    fn single_element_formulas_are_spherical() {
        for formula in ["Ne", "Na", "O2", "Cl2", "S8"] {
            let result = infer_shape(formula).unwrap();
            assert_eq!(result.geometry, MolecularGeometry::Spherical, "{formula}");
            assert_eq!(result.lone_pairs, 0, "{formula}");
        }
    }

    #[test]
    fn textbook_molecules_resolve_from_the_special_case_table() {
        let expectations = [
            ("H2O", MolecularGeometry::BentTetrahedral, 2, "O"),
            ("NH3", MolecularGeometry::TrigonalPyramidal, 1, "N"),
            ("CH4", MolecularGeometry::Tetrahedral, 0, "C"),
            ("CO2", MolecularGeometry::Linear, 0, "C"),
            ("SO2", MolecularGeometry::BentTrigonal, 1, "S"),
            ("PCl5", MolecularGeometry::TrigonalBipyramidal, 0, "P"),
            ("SF6", MolecularGeometry::Octahedral, 0, "S"),
            ("SF4", MolecularGeometry::Seesaw, 1, "S"),
            ("ClF3", MolecularGeometry::TShaped, 2, "Cl"),
            ("BrF5", MolecularGeometry::SquarePyramidal, 1, "Br"),
            ("XeF2", MolecularGeometry::Linear, 3, "Xe"),
            ("XeF4", MolecularGeometry::SquarePlanar, 2, "Xe"),
            ("IF7", MolecularGeometry::PentagonalBipyramidal, 0, "I"),
        ];
        for (formula, geometry, lone_pairs, center) in expectations {
            let result = infer_shape(formula).unwrap();
            assert_eq!(result.geometry, geometry, "{formula}");
            assert_eq!(result.lone_pairs, lone_pairs, "{formula}");
            assert_eq!(result.center_atom, center, "{formula}");
        }
    }

    #[test]
    fn special_case_lookup_is_case_insensitive() {
        let lowered = infer_shape("ch4").unwrap();
        assert_eq!(lowered.geometry, MolecularGeometry::Tetrahedral);
        assert_eq!(lowered.center_atom, "C");
        // The composition is reconstructed even though "ch4" cannot parse.
        assert_eq!(lowered.composition.count_of("H"), 4);

        assert_eq!(infer_shape("xef4").unwrap(), infer_shape("XeF4").unwrap());
    }

    #[test]
    fn ozone_collapses_to_the_single_atom_stage() {
        // O3 has one distinct element, and the single-atom stage runs
        // before the special-case table, so its curated entry never fires.
        let result = infer_shape("O3").unwrap();
        assert_eq!(result.geometry, MolecularGeometry::Spherical);
    }

    #[test]
    fn diatomics_outside_the_table_are_linear() {
        for (formula, center) in [("HCl", "H"), ("NaCl", "Na"), ("CO", "C"), ("HF", "H")] {
            let result = infer_shape(formula).unwrap();
            assert_eq!(result.geometry, MolecularGeometry::Linear, "{formula}");
            assert_eq!(result.lone_pairs, 0, "{formula}");
            assert_eq!(result.center_atom, center, "{formula}");
        }
    }

    #[test]
    fn inference_is_idempotent() {
        for formula in ["H2O", "NCl3", "HCl", "Ne", "BeCl2", "ch4"] {
            assert_eq!(
                infer_shape(formula).unwrap(),
                infer_shape(formula).unwrap(),
                "{formula}"
            );
        }
    }

    #[test]
    fn unknown_elements_fail_explicitly() {
        assert_eq!(
            infer_shape("SnCl4"),
            Err(ShapeError::UnknownElement("Sn".to_string()))
        );
    }

    #[test]
    fn unknown_elements_still_resolve_via_shortcut_stages() {
        // Sn has no valence data, but the single-atom and diatomic stages
        // never consult the valence table for it.
        assert_eq!(
            infer_shape("Sn").unwrap().geometry,
            MolecularGeometry::Spherical
        );
        assert_eq!(
            infer_shape("SnO").unwrap().geometry,
            MolecularGeometry::Linear
        );
    }

    #[test]
    fn oversized_steric_numbers_fail_explicitly() {
        assert_eq!(
            infer_shape("XeF6"),
            Err(ShapeError::UnsupportedMolecule("XeF6".to_string()))
        );
    }

    #[test]
    fn unparseable_formulas_fail_as_unsupported() {
        assert_eq!(
            infer_shape("Ca(OH"),
            Err(ShapeError::UnsupportedMolecule("Ca(OH".to_string()))
        );
        assert_eq!(
            infer_shape(""),
            Err(ShapeError::UnsupportedMolecule(String::new()))
        );
    }

    #[test]
    fn every_inferred_geometry_is_drawable() {
        let formulas = [
            "Ne", "O2", "H2O", "NH3", "CH4", "CO2", "SO2", "SO3", "H2SO4", "H3PO4", "HNO3",
            "PCl5", "SF6", "PF5", "SF4", "ClF3", "BrF5", "XeF2", "XeF4", "IF7", "HCl", "NaCl",
            "CO", "NCl3", "CCl4", "SiF4", "BeCl2", "OH2",
        ];
        for formula in formulas {
            let result = infer_shape(formula).unwrap();
            let directions = ligand_directions(result.geometry);
            // Spherical draws no ligands; everything else must have enough
            // direction slots for its geometry.
            if result.geometry != MolecularGeometry::Spherical {
                assert!(!directions.is_empty(), "{formula} is not drawable");
            }
        }
    }

    #[test]
    fn bond_count_never_exceeds_layout_slots_for_exact_results() {
        // For results whose lone-pair count was not degraded, the number of
        // surrounding atoms matches the geometry's ligand slots.
        for formula in ["H2O", "NH3", "CH4", "PCl5", "SF6", "NCl3", "CCl4"] {
            let result = infer_shape(formula).unwrap();
            assert_eq!(
                result.surrounding_atoms().len(),
                ligand_directions(result.geometry).len(),
                "{formula}"
            );
        }
    }
}
