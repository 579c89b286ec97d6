use super::{ShapeQuery, ShapeResolver};
use crate::core::models::geometry::MolecularGeometry;
use crate::core::models::shape::ShapeResult;
use crate::core::tables::valence::valence_electrons_or_default;
use crate::engine::error::ShapeError;

/// Resolves heteronuclear diatomics (two distinct elements, one atom each):
/// always linear, with the center taken as the atom with the lower valence
/// electron count — a proxy for lower electronegativity among the
/// main-group elements this model covers.
pub struct DiatomicResolver;

impl ShapeResolver for DiatomicResolver {
    fn name(&self) -> &'static str {
        "diatomic"
    }

    fn try_resolve(&self, query: &ShapeQuery) -> Result<Option<ShapeResult>, ShapeError> {
        let composition = query.composition;
        if composition.distinct_elements() != 2 || composition.total_atoms() != 2 {
            return Ok(None);
        }

        let mut elements = composition.elements();
        let (first, second) = match (elements.next(), elements.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Ok(None),
        };
        // Ties go to the second element; unknown symbols compare as 8.
        let center = if valence_electrons_or_default(first) < valence_electrons_or_default(second) {
            first
        } else {
            second
        };

        Ok(Some(ShapeResult::new(
            MolecularGeometry::Linear,
            0,
            composition.clone(),
            center,
        )))
    }
}
