//! Core - logging and randomness shared by every layer

#[macro_use]
pub mod utils;
pub mod random;
