//! Explicit, ordered port schemas for bus functional models.
//!
//! The schema replaces attribute reflection with an explicit field list: the
//! implementer declares each port by name, in the order it appears in the
//! test-vector files. Everything downstream (record writing, record loading,
//! VHDL generation) consumes the declaration order as-is.

use std::io::Write;

use rand::Rng;
use testvec_codec::{write_record, Token};

use crate::error::ModelError;
use crate::signal::{Mode, Signal};

/// Name used for the entity under test when none is given.
pub const DEFAULT_ENTITY: &str = "uut";

/// A bus functional model: an entity name plus an ordered list of named ports.
///
/// Declaration order is significant. Records are written and read with one
/// token per port, in exactly the order the ports were pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bfm {
    entity: String,
    fields: Vec<(String, Signal)>,
}

impl Bfm {
    /// Creates an empty schema for the named entity.
    ///
    /// An empty name falls back to [`DEFAULT_ENTITY`].
    pub fn new(entity: impl Into<String>) -> Self {
        let entity = entity.into();
        Self {
            entity: if entity.is_empty() {
                DEFAULT_ENTITY.to_string()
            } else {
                entity
            },
            fields: Vec::new(),
        }
    }

    /// Returns the name of the entity under test.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Appends a named port to the schema.
    ///
    /// Fails if a field with the same name was already declared.
    pub fn push(&mut self, name: impl Into<String>, signal: Signal) -> Result<(), ModelError> {
        let name = name.into();
        if self.fields.iter().any(|(n, _)| *n == name) {
            return Err(ModelError::DuplicateField(name));
        }
        self.fields.push((name, signal));
        Ok(())
    }

    /// Chainable variant of [`push`](Self::push) for literal schema declarations.
    pub fn field(mut self, name: impl Into<String>, signal: Signal) -> Result<Self, ModelError> {
        self.push(name, signal)?;
        Ok(self)
    }

    /// Looks up a port by name.
    pub fn get(&self, name: &str) -> Result<&Signal, ModelError> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
            .ok_or_else(|| ModelError::UnknownField(name.to_string()))
    }

    /// Looks up a port by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Signal, ModelError> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
            .ok_or_else(|| ModelError::UnknownField(name.to_string()))
    }

    /// Iterates all ports in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Signal)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Iterates the ports of one direction, preserving declaration order.
    pub fn fields_by_mode(&self, mode: Mode) -> impl Iterator<Item = (&str, &Signal)> {
        self.fields()
            .filter(move |(_, signal)| signal.mode() == mode)
    }

    /// Number of declared ports.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Checks whether the schema has no ports.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sets every input port to a uniformly random in-range value.
    pub fn randomize_inputs<R: Rng>(&mut self, rng: &mut R) -> &mut Self {
        for (_, signal) in self.fields.iter_mut() {
            if signal.mode() == Mode::Input {
                signal.randomize(rng);
            }
        }
        self
    }

    /// Renders the ports of one direction as record tokens, in declaration order.
    pub fn tokens(&self, mode: Mode) -> Vec<Token> {
        self.fields_by_mode(mode)
            .map(|(_, signal)| Token::Bits(signal.as_bits()))
            .collect()
    }

    /// Writes one record carrying the ports of the given direction.
    ///
    /// A direction with no declared ports still emits a line: a bare `"\n"`,
    /// which a positional parser cannot distinguish from one empty token
    /// since the format has no escaping. Callers should only write directions
    /// the schema declares.
    pub fn write_vector<W: Write>(&self, out: &mut W, mode: Mode) -> Result<(), ModelError> {
        write_record(out, &self.tokens(mode))?;
        Ok(())
    }
}
