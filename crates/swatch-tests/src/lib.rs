//! Integration tests for the swatch crates.
//!
//! End-to-end scenarios that cross crate boundaries: hex input through
//! conversion and comparison to reports, property sweeps over generated
//! inputs, and the contract pins that individual crates only cover
//! locally. Property sweeps use a small deterministic LCG so failures
//! reproduce exactly.
