//! Property-based tests for conversion invariants

mod determinism;
