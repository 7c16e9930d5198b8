//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Special moves, check, mate and stalemate
//! - `perft.rs` - Node counts for move generation
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Fixed-depth and iterative search
//! - `proptest.rs` - Property-based tests over random playouts

mod eval;
