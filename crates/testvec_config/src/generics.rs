//! HDL generic extraction and command-line overrides.
//!
//! Generic defaults are scraped from a captured entity signal listing (lines
//! of the form `constant NAME : TYPE := DEFAULT;`). Values stay as strings;
//! casting to a concrete type is the caller's job, with helpers for the
//! common VHDL `boolean` and enable/disable option encodings. Overrides from
//! the command line (`-g NAME=VALUE`, repeatable) win over scraped defaults.

use clap::Parser;

/// An ordered map of generic names to optional string values.
///
/// Insertion order is preserved so generated reports match the entity's
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generics {
    entries: Vec<(String, Option<String>)>,
}

impl Generics {
    /// Creates an empty generic map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a generic, if the generic exists and has one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Checks whether a generic with this name exists, valued or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Sets a generic's value, replacing any existing entry of the same name.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    /// Number of known generics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether no generics are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts generic constants from a captured entity signal listing.
///
/// Scans each line for a `constant NAME : TYPE := DEFAULT;` declaration and
/// records the name with its default value, if one is present. Lines without
/// a terminated constant declaration are skipped.
pub fn parse_entity_constants(text: &str) -> Generics {
    let mut generics = Generics::new();
    for line in text.lines() {
        let Some(start) = line.find("constant ") else {
            continue;
        };
        let decl = &line[start + "constant ".len()..];
        let Some(end) = decl.find(';') else {
            continue;
        };
        let decl = &decl[..end];
        let name = decl.split_whitespace().next().unwrap_or("");
        if name.is_empty() {
            continue;
        }
        let value = decl
            .find(":= ")
            .map(|i| decl[i + ":= ".len()..].trim().to_string());
        generics.set(name, value);
    }
    generics
}

/// Repeatable `-g NAME[=VALUE]` generic overrides from the command line.
#[derive(Parser, Debug, Default)]
#[command(name = "testvec")]
pub struct GenericOverrides {
    /// Override a generic, e.g. `-g WIDTH=8`. A bare name clears the value.
    #[arg(short = 'g', long = "generic", value_name = "NAME[=VALUE]")]
    pub generic: Vec<String>,
}

impl GenericOverrides {
    /// Merges the overrides into `generics`, command line winning.
    pub fn apply(&self, generics: &mut Generics) {
        for arg in &self.generic {
            match arg.split_once('=') {
                Some((name, value)) => generics.set(name, Some(value.to_string())),
                None => generics.set(arg.as_str(), None),
            }
        }
    }
}

/// Interprets a string encoded as a VHDL `boolean`.
pub fn parse_vhdl_bool(s: &str) -> bool {
    s.eq_ignore_ascii_case("true")
}

/// Interprets a string encoded as an enable/disable option.
pub fn parse_vhdl_option(s: &str) -> bool {
    s.eq_ignore_ascii_case("enable")
}
