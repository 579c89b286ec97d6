pub mod formula;
pub mod models;
pub mod tables;
