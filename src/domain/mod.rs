//! Domain - what can live in a cell

pub mod elements;
pub mod particle;
pub mod content;
