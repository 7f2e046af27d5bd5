use std::path::Path;

use crate::error::{NetError, Result};
use crate::io::text_file;
use crate::network::network::Network;

impl Network {
    /// Serializes the whole network (layers, activation, target, learning
    /// rate) to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a network previously written by [`Network::to_json`] and
    /// checks that the three layers fit together and that there is an
    /// output node to read.
    pub fn from_json(text: &str) -> Result<Network> {
        let network: Network = serde_json::from_str(text)?;
        if network.output.is_empty() {
            return Err(NetError::ShapeMismatch { layer: "output", expected: 1, actual: 0 });
        }
        network.input.check_shape("input", 0)?;
        network.hidden.check_shape("hidden", network.input.len())?;
        network.output.check_shape("output", network.hidden.len())?;
        Ok(network)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        text_file::write_text(path, &self.to_json()?)?;
        log::debug!("saved network snapshot to {}", path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Network> {
        let path = path.as_ref();
        let network = Network::from_json(&text_file::read_text(path)?)?;
        let (i, h, o) = network.shape();
        log::debug!("loaded {i}-{h}-{o} network from {}", path.display());
        Ok(network)
    }
}
