//! Configuration data structures for a generation session.

use serde::{Deserialize, Serialize};

/// The full contents of a `testvec.toml` session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The testbench entity the session targets.
    pub bench: BenchConfig,
    /// Vector file names and generation parameters.
    #[serde(default)]
    pub vectors: VectorConfig,
}

/// The `[bench]` table: which entity is under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Name of the entity under test.
    pub entity: String,
}

/// The `[vectors]` table: file names and generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorConfig {
    /// File receiving stimulus records.
    #[serde(default = "default_inputs")]
    pub inputs: String,
    /// File receiving expected-output records.
    #[serde(default = "default_outputs")]
    pub outputs: String,
    /// Number of transactions to generate.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Seed for the stimulus RNG. Unseeded runs draw from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            inputs: default_inputs(),
            outputs: default_outputs(),
            count: default_count(),
            seed: None,
        }
    }
}

fn default_inputs() -> String {
    "inputs.dat".to_string()
}

fn default_outputs() -> String {
    "outputs.dat".to_string()
}

fn default_count() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_defaults() {
        let v = VectorConfig::default();
        assert_eq!(v.inputs, "inputs.dat");
        assert_eq!(v.outputs, "outputs.dat");
        assert_eq!(v.count, 100);
        assert_eq!(v.seed, None);
    }

    #[test]
    fn serde_round_trip() {
        let config = SessionConfig {
            bench: BenchConfig {
                entity: "adder_tb".to_string(),
            },
            vectors: VectorConfig {
                inputs: "stim.dat".to_string(),
                outputs: "gold.dat".to_string(),
                count: 500,
                seed: Some(7),
            },
        };
        let text = toml::to_string(&config).unwrap();
        let back: SessionConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.bench.entity, "adder_tb");
        assert_eq!(back.vectors.inputs, "stim.dat");
        assert_eq!(back.vectors.count, 500);
        assert_eq!(back.vectors.seed, Some(7));
    }
}
