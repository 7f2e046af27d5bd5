use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};

/// Weights on the connections from every node of the previous layer into a
/// single node. Empty for input-layer nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub values: Vec<f64>,
}

impl WeightVector {
    /// `len` weights drawn independently from U[-1, 1].
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> WeightVector {
        let values = (0..len).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        WeightVector { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(values: Vec<f64>) -> Self {
        WeightVector { values }
    }
}

/// Node activation values plus, for each node, the weights feeding it.
///
/// `values[i]` and `weights[i]` describe the same node; `weights[i].values[k]`
/// is the weight on the connection from node `k` of the previous layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub values: Vec<f64>,
    pub weights: Vec<WeightVector>,
}

impl Layer {
    /// Allocates `node_count` zeroed nodes, each with `previous_size` random
    /// weights in [-1, 1]. No fan-in scaling is applied.
    pub fn build<R: Rng + ?Sized>(node_count: usize, previous_size: usize, rng: &mut R) -> Layer {
        let values = vec![0.0; node_count];
        let weights = (0..node_count)
            .map(|_| WeightVector::random(previous_size, rng))
            .collect();

        Layer { values, weights }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overwrites every weight in the layer with `value`.
    pub fn fill_weights(&mut self, value: f64) {
        for node in &mut self.weights {
            node.values.iter_mut().for_each(|w| *w = value);
        }
    }

    /// Computes `values[j] = activate(Σ_i from.values[i] * weights[j][i])`
    /// for every node of this layer.
    pub(crate) fn feed_from<F>(&mut self, from: &Layer, activate: F)
    where
        F: Fn(f64) -> f64,
    {
        for (value, node) in self.values.iter_mut().zip(&self.weights) {
            let mut sum = 0.0;
            for (index, weight) in node.values.iter().enumerate() {
                sum += from.values[index] * weight;
            }
            *value = activate(sum);
        }
    }

    /// Verifies `values`/`weights` agree in length and that every weight
    /// vector has `previous_size` entries. `name` labels the error.
    pub fn check_shape(&self, name: &'static str, previous_size: usize) -> Result<()> {
        if self.weights.len() != self.values.len() {
            return Err(NetError::ShapeMismatch {
                layer: name,
                expected: self.values.len(),
                actual: self.weights.len(),
            });
        }
        match self.weights.iter().find(|node| node.len() != previous_size) {
            Some(node) => Err(NetError::ShapeMismatch {
                layer: name,
                expected: previous_size,
                actual: node.len(),
            }),
            None => Ok(()),
        }
    }
}
