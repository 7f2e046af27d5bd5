pub mod activation;
pub mod layers;
pub mod network;
pub mod io;
pub mod error;

// Convenience re-exports
pub use activation::activation::ActivationKind;
pub use layers::layer::{Layer, WeightVector};
pub use network::network::Network;
pub use network::config::NetworkConfig;
pub use error::{NetError, Result};
