//! The terminal, electron-counting stage of the resolver chain.
//!
//! Picks a central atom, tallies valence electrons and sigma bonds,
//! resolves the lone-pair count, and maps the resulting steric number onto
//! the geometry dictionary. Every surrounding atom contributes exactly one
//! sigma bond to the center; multiple bonds and resonance are not modeled,
//! which is why the known-lone-pair table overrides electron counting for
//! the common central atoms.

use super::{ShapeQuery, ShapeResolver};
use crate::core::models::geometry::MolecularGeometry;
use crate::core::models::shape::ShapeResult;
use crate::core::tables::geometries::geometry_for;
use crate::core::tables::valence::{
    EXPANDED_OCTET_ELEMENTS, KNOWN_LONE_PAIRS, TERMINAL_ELEMENTS, valence_electrons,
    valence_electrons_or_default,
};
use crate::engine::error::ShapeError;
use tracing::{debug, trace};

pub struct HeuristicResolver;

impl ShapeResolver for HeuristicResolver {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn try_resolve(&self, query: &ShapeQuery) -> Result<Option<ShapeResult>, ShapeError> {
        let composition = query.composition;

        let center = match select_center(query) {
            Some(center) => center.to_string(),
            None => return Err(ShapeError::UnsupportedMolecule(query.formula.to_string())),
        };

        let mut total_valence_electrons: u32 = 0;
        for (element, count) in composition.iter() {
            let Some(valence) = valence_electrons(element) else {
                return Err(ShapeError::UnknownElement(element.to_string()));
            };
            total_valence_electrons += valence * count;
        }

        let bond_count: u32 = composition
            .iter()
            .filter(|(element, _)| *element != center)
            .map(|(_, count)| count)
            .sum();

        let lone_pairs = resolve_lone_pairs(&center, total_valence_electrons, bond_count);
        let steric_number = bond_count + lone_pairs;
        trace!(
            formula = query.formula,
            center,
            total_valence_electrons,
            bond_count,
            lone_pairs,
            steric_number,
            "electron bookkeeping complete"
        );

        if steric_number > 6 {
            if let Some(geometry) = recover_hypervalent(&center, bond_count) {
                debug!(formula = query.formula, %geometry, "hypervalent recovery applied");
                return Ok(Some(ShapeResult::new(
                    geometry,
                    0,
                    composition.clone(),
                    &center,
                )));
            }
            return Err(ShapeError::UnsupportedMolecule(query.formula.to_string()));
        }

        let Some((geometry, adjusted_lone_pairs)) = geometry_for(steric_number, lone_pairs) else {
            return Err(ShapeError::UnsupportedMolecule(query.formula.to_string()));
        };
        if adjusted_lone_pairs != lone_pairs {
            debug!(
                formula = query.formula,
                lone_pairs, adjusted_lone_pairs, "degraded to nearest tabulated lone-pair count"
            );
        }

        Ok(Some(ShapeResult::new(
            geometry,
            adjusted_lone_pairs,
            composition.clone(),
            &center,
        )))
    }
}

/// Chooses the central atom: hydrogen and the halogens are excluded from
/// candidacy (falling back to all elements when that empties the set), and
/// the winner minimizes (atom count, valence electron count) — the least
/// abundant, most electropositive atom this model can identify without
/// true electronegativity data.
fn select_center<'a>(query: &ShapeQuery<'a>) -> Option<&'a str> {
    let composition = query.composition;
    let mut candidates: Vec<&str> = composition
        .elements()
        .filter(|element| !TERMINAL_ELEMENTS.contains(element))
        .collect();
    if candidates.is_empty() {
        candidates = composition.elements().collect();
    }
    candidates.into_iter().min_by_key(|element| {
        (
            composition.count_of(element),
            valence_electrons_or_default(element),
        )
    })
}

/// Lone pairs on the center: the known-element table wins outright;
/// otherwise octet (or expanded-octet) arithmetic, clamped at zero.
fn resolve_lone_pairs(center: &str, total_valence_electrons: u32, bond_count: u32) -> u32 {
    if let Some(&known) = KNOWN_LONE_PAIRS.get(center) {
        return known;
    }
    let lone_pair_electrons = if EXPANDED_OCTET_ELEMENTS.contains(center) {
        total_valence_electrons.saturating_sub(2 * bond_count)
    } else {
        total_valence_electrons.saturating_sub(8)
    };
    lone_pair_electrons / 2
}

/// Narrow recovery for steric numbers above 6: hypervalent S and P centers
/// with 4–6 bonds are assigned the ideal no-lone-pair geometry for their
/// bond count.
fn recover_hypervalent(center: &str, bond_count: u32) -> Option<MolecularGeometry> {
    if center != "S" && center != "P" {
        return None;
    }
    match bond_count {
        4 => Some(MolecularGeometry::Tetrahedral),
        5 => Some(MolecularGeometry::TrigonalBipyramidal),
        6 => Some(MolecularGeometry::Octahedral),
        _ => None,
    }
}
