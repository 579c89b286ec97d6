//! The ordered chain of shape resolvers.
//!
//! Each resolver answers one narrow question about a query and declines the
//! rest by returning `Ok(None)`. The engine tries them in fixed priority
//! order: single-atom, special-case, diatomic, heuristic. The heuristic
//! resolver is the terminal stage and always either produces a result or
//! fails with a [`ShapeError`].

pub mod diatomic;
pub mod heuristic;
pub mod single_atom;
pub mod special_cases;

use crate::core::models::composition::Composition;
use crate::core::models::shape::ShapeResult;
use crate::engine::error::ShapeError;

/// One formula query as seen by the resolvers.
#[derive(Debug, Clone, Copy)]
pub struct ShapeQuery<'a> {
    /// The raw formula string as supplied by the caller.
    pub formula: &'a str,
    /// The parsed atomic makeup of the formula.
    pub composition: &'a Composition,
}

/// A single strategy for answering a shape query.
pub trait ShapeResolver: Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Attempts to resolve the query.
    ///
    /// Returns `Ok(None)` when the query is outside this resolver's scope,
    /// `Ok(Some(result))` on success, and `Err` only for inputs this
    /// resolver is responsible for but cannot model.
    fn try_resolve(&self, query: &ShapeQuery) -> Result<Option<ShapeResult>, ShapeError>;
}
