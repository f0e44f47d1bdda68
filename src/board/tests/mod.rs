//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Piece movement, Shield protection, drops, bonus follow-ups
//! - `make_move.rs` - Position updates: captures, promotion, turns, hashing
//! - `eval.rs` - Static evaluation terms
//! - `search_tables.rs` - Killers and move ordering
//! - `search.rs` - Alpha-beta, quiescence, bonus recursion, driver
//! - `proptest.rs` - Property-based tests

mod eval;
mod proptest;
