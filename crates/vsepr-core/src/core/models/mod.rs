pub mod composition;
pub mod geometry;
pub mod shape;
