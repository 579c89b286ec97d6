use super::{ShapeQuery, ShapeResolver};
use crate::core::models::geometry::MolecularGeometry;
use crate::core::models::shape::ShapeResult;
use crate::engine::error::ShapeError;

/// Resolves formulas with a single distinct element: a bare atom or
/// monatomic ion with no surrounding ligands, drawn as a lone sphere.
pub struct SingleAtomResolver;

impl ShapeResolver for SingleAtomResolver {
    fn name(&self) -> &'static str {
        "single-atom"
    }

    fn try_resolve(&self, query: &ShapeQuery) -> Result<Option<ShapeResult>, ShapeError> {
        if query.composition.distinct_elements() != 1 {
            return Ok(None);
        }
        let element = query
            .composition
            .elements()
            .next()
            .map(str::to_string)
            .unwrap_or_default();
        Ok(Some(ShapeResult::new(
            MolecularGeometry::Spherical,
            0,
            query.composition.clone(),
            &element,
        )))
    }
}
