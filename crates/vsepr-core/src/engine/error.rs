use thiserror::Error;

/// The two failure kinds the shape engine can surface.
///
/// Both are non-retryable and carry enough context for a UI layer to name
/// the offending input. The engine never returns partial results.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// The composition references an element with no valence-electron data;
    /// the formula uses chemistry outside the supported set.
    #[error("No valence electron data for element '{0}'")]
    UnknownElement(String),

    /// No geometry could be derived: the steric number exceeds the model's
    /// vocabulary with no hypervalent recovery, or the formula itself did
    /// not parse.
    #[error("Cannot determine a molecular geometry for '{0}'")]
    UnsupportedMolecule(String),
}
