use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationKind;
use crate::error::{NetError, Result};
use crate::io::text_file;

/// Learning rate used when none is given.
pub const DEFAULT_LEARN_RATE: f64 = 0.05;

fn default_outputs() -> usize { 1 }
fn default_learn_rate() -> f64 { DEFAULT_LEARN_RATE }

/// Everything needed to build a fresh [`Network`](crate::Network).
///
/// Fields:
/// - `num_inputs`  — input layer size
/// - `num_hidden`  — hidden layer size
/// - `num_outputs` — output layer size; forward returns node 0 only
/// - `target`      — initial expected value for backward propagation
/// - `activation`  — nonlinearity for hidden and output nodes
/// - `learn_rate`  — fixed for the lifetime of the network
/// - `seed`        — seeds weight generation; `None` draws from the thread RNG
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub num_inputs: usize,
    pub num_hidden: usize,
    #[serde(default = "default_outputs")]
    pub num_outputs: usize,
    #[serde(default)]
    pub target: f64,
    #[serde(default)]
    pub activation: ActivationKind,
    #[serde(default = "default_learn_rate")]
    pub learn_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn new(
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        target: f64,
        activation: ActivationKind,
    ) -> Self {
        NetworkConfig {
            num_inputs,
            num_hidden,
            num_outputs,
            target,
            activation,
            learn_rate: DEFAULT_LEARN_RATE,
            seed: None,
        }
    }

    /// Hidden-layer size rule of thumb: two thirds of input plus output
    /// nodes, never below one.
    pub fn suggested_hidden(num_inputs: usize, num_outputs: usize) -> usize {
        ((num_inputs + num_outputs) * 2 / 3).max(1)
    }

    /// Parses a config; at least one output node is required since
    /// forward reads the first one.
    pub fn from_json(text: &str) -> Result<NetworkConfig> {
        let config: NetworkConfig = serde_json::from_str(text)?;
        if config.num_outputs == 0 {
            return Err(NetError::ShapeMismatch { layer: "output", expected: 1, actual: 0 });
        }
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkConfig> {
        NetworkConfig::from_json(&text_file::read_text(path)?)
    }
}
