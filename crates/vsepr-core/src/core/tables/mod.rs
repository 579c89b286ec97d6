pub mod geometries;
pub mod layout;
pub mod valence;
