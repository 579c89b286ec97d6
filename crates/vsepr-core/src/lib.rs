//! # VSEPR Core Library
//!
//! A library for inferring idealized molecular geometries from chemical
//! formulas, based on the Valence Shell Electron Pair Repulsion (VSEPR)
//! model. It powers the 3D structure view of chemistry teaching tools:
//! given a formula such as `"H2O"` or `"PCl5"`, it names the molecular
//! geometry, the central atom, and the lone-pair count, and provides the
//! idealized ligand directions an external renderer needs to draw it.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Composition`,
//!   `MolecularGeometry`, `ShapeResult`), the chemical formula parser, and
//!   the read-only static tables (valence electrons, geometry dictionary,
//!   ligand layout) that the VSEPR model is built on.
//!
//! - **[`engine`]: The Logic Core.** An ordered chain of shape resolvers
//!   (single-atom, special-case, diatomic, heuristic) tried in fixed
//!   priority order behind the single public entry point
//!   [`infer_shape`](engine::infer_shape). The engine is a pure function of
//!   its input plus the static tables: no I/O, no shared mutable state,
//!   safe to call concurrently without coordination.
//!
//! ## Example
//!
//! ```
//! use vsepr::engine::infer_shape;
//! use vsepr::core::models::geometry::MolecularGeometry;
//!
//! let result = infer_shape("NH3").unwrap();
//! assert_eq!(result.geometry, MolecularGeometry::TrigonalPyramidal);
//! assert_eq!(result.lone_pairs, 1);
//! assert_eq!(result.center_atom, "N");
//! ```

pub mod core;
pub mod engine;
