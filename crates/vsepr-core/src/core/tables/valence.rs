//! Per-element constants: valence electron counts, canonical lone-pair
//! counts for common central atoms, and element classification sets.

use phf::{Map, Set, phf_map, phf_set};

/// Valence electron counts for the supported element set.
///
/// Main-group values are the group's outer-shell electron count; the
/// first-row transition metals carry their (4s + 3d) electron totals, which
/// the central-atom heuristic only ever uses for tie-breaking.
#[rustfmt::skip]
pub static VALENCE_ELECTRONS: Map<&'static str, u32> = phf_map! {
    "H" => 1, "He" => 2,
    "Li" => 1, "Be" => 2, "B" => 3, "C" => 4, "N" => 5, "O" => 6, "F" => 7, "Ne" => 8,
    "Na" => 1, "Mg" => 2, "Al" => 3, "Si" => 4, "P" => 5, "S" => 6, "Cl" => 7, "Ar" => 8,
    "K" => 1, "Ca" => 2,
    "Sc" => 3, "Ti" => 4, "V" => 5, "Cr" => 6, "Mn" => 7, "Fe" => 8, "Co" => 9, "Ni" => 10,
    "Cu" => 11, "Zn" => 12,
    "Ga" => 3, "Ge" => 4, "As" => 5, "Se" => 6, "Br" => 7, "Kr" => 8,
    "I" => 7, "Xe" => 8,
};

/// Canonical lone-pair counts for the common central atoms.
///
/// When the center is one of these, the fixed value overrides electron
/// counting: generic octet arithmetic miscounts molecules with double or
/// triple bonds, which the single-sigma-bond model cannot detect.
pub static KNOWN_LONE_PAIRS: Map<&'static str, u32> = phf_map! {
    "O" => 2, "N" => 1, "C" => 0, "S" => 0, "P" => 0, "Si" => 0, "B" => 0, "Al" => 0,
};

/// Elements capable of an expanded octet (steric numbers above 4).
pub static EXPANDED_OCTET_ELEMENTS: Set<&'static str> = phf_set! {
    "S", "P", "Cl", "Br", "I", "Xe", "Se", "As", "Sb", "Te",
};

/// Hydrogen and the halogens: essentially never central in the covalent
/// and ionic species this model covers.
pub static TERMINAL_ELEMENTS: Set<&'static str> = phf_set! {
    "H", "F", "Cl", "Br", "I",
};

/// Valence electron count for `element`, if the element is supported.
pub fn valence_electrons(element: &str) -> Option<u32> {
    VALENCE_ELECTRONS.get(element).copied()
}

/// Valence electron count with the noble-gas default used by the
/// electronegativity-proxy comparisons (unknown symbols compare as 8).
pub fn valence_electrons_or_default(element: &str) -> u32 {
    valence_electrons(element).unwrap_or(8)
}
