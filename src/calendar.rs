//! Calendar grid generation: deterministic month grids with no IO.

pub mod grid;
