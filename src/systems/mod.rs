//! Systems - what happens to particles each tick

pub mod behaviors;
