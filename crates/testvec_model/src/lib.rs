//! Software models for driving and checking HDL simulations.
//!
//! A [`Signal`] holds the value of one hardware signal at a fixed bit width.
//! A [`Bfm`] is an explicit, ordered port schema: the implementer declares
//! each field by name, and stimulus/expected-output records are written and
//! read in exactly that declaration order. [`VectorWriter`] and
//! [`VectorReader`] own the test-vector file handles for the duration of a
//! generation or comparison session.

#![warn(missing_docs)]

pub mod bfm;
pub mod error;
pub mod signal;
pub mod vector;

pub use bfm::Bfm;
pub use error::ModelError;
pub use signal::{Mode, Signal};
pub use vector::{VectorReader, VectorWriter};
