//! Spatial - cell storage

pub mod grid;
