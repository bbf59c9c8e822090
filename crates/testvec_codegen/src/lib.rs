//! VHDL snippet generation for testbench scaffolding.
//!
//! Given an explicit port schema, this crate renders the three pieces of
//! boilerplate a file-driven testbench needs: the BFM record type, the
//! procedure that drives one stimulus record per clock, and the scoreboard
//! procedure that loads and checks one expected-output record. The snippets
//! assume the testbench support package (`drive_single`, `drive_vector`,
//! `load_single`, `load_vector`, `assert_eq`) is already in scope.

#![warn(missing_docs)]

pub mod vhdl;

pub use vhdl::{driver_snippet, record_snippet, scoreboard_snippet};
