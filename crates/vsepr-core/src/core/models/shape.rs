use super::composition::Composition;
use super::geometry::MolecularGeometry;
use serde::{Deserialize, Serialize};

/// The engine's answer for one formula query.
///
/// Constructed fresh per query; carries the input composition through
/// unchanged so renderers can color the surrounding atoms by element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeResult {
    /// The inferred idealized geometry. Always drawable: it has a matching
    /// entry in the ligand-direction layout table.
    pub geometry: MolecularGeometry,
    /// Non-bonding electron pairs on the central atom.
    pub lone_pairs: u32,
    /// The atomic makeup of the query formula, passed through unchanged.
    pub composition: Composition,
    /// Element symbol of the central atom (e.g. `"O"` for water).
    pub center_atom: String,
}

impl ShapeResult {
    pub fn new(
        geometry: MolecularGeometry,
        lone_pairs: u32,
        composition: Composition,
        center_atom: &str,
    ) -> Self {
        Self {
            geometry,
            lone_pairs,
            composition,
            center_atom: center_atom.to_string(),
        }
    }

    /// Atoms surrounding the center, one symbol per sigma bond, in the
    /// composition's element order. Length equals the engine's bond count.
    pub fn surrounding_atoms(&self) -> Vec<&str> {
        let mut atoms = Vec::new();
        for (element, count) in self.composition.iter() {
            if element != self.center_atom {
                atoms.extend(std::iter::repeat_n(element, count as usize));
            }
        }
        atoms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> ShapeResult {
        let composition: Composition = [("H".to_string(), 2), ("O".to_string(), 1)]
            .into_iter()
            .collect();
        ShapeResult::new(MolecularGeometry::BentTetrahedral, 2, composition, "O")
    }

    #[test]
    fn surrounding_atoms_expands_counts_and_skips_center() {
        assert_eq!(water().surrounding_atoms(), vec!["H", "H"]);
    }

    #[test]
    fn surrounding_atoms_is_empty_for_bare_atoms() {
        let composition: Composition = [("Ne".to_string(), 1)].into_iter().collect();
        let result = ShapeResult::new(MolecularGeometry::Spherical, 0, composition, "Ne");
        assert!(result.surrounding_atoms().is_empty());
    }

    #[test]
    fn result_preserves_input_composition() {
        let result = water();
        assert_eq!(result.composition.count_of("H"), 2);
        assert_eq!(result.composition.count_of("O"), 1);
    }
}
