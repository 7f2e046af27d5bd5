pub mod layer;

pub use layer::{Layer, WeightVector};
