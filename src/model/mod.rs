//src/model/mod.rs
pub mod chain;
pub mod lattice;
