use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationKind;
use crate::layers::layer::Layer;
use crate::network::config::{NetworkConfig, DEFAULT_LEARN_RATE};

/// Input, hidden and output layer with a single activation kind, a fixed
/// learning rate and the target used by [`Network::backward`].
///
/// The layers, `activation` and `target` are public: the host may inspect
/// or overwrite them between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub input: Layer,
    pub hidden: Layer,
    pub output: Layer,
    pub activation: ActivationKind,
    pub target: f64,
    learn_rate: f64,
}

impl Network {
    /// Builds a network with weights drawn from the thread RNG and the
    /// default learning rate.
    pub fn init(
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        target: f64,
        activation: ActivationKind,
    ) -> Network {
        Network::init_with_rng(
            num_inputs,
            num_hidden,
            num_outputs,
            target,
            activation,
            &mut rand::thread_rng(),
        )
    }

    /// Same as [`Network::init`] with a caller-supplied RNG.
    pub fn init_with_rng<R: Rng + ?Sized>(
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        target: f64,
        activation: ActivationKind,
        rng: &mut R,
    ) -> Network {
        let mut network = Network::unbuilt(target, activation, DEFAULT_LEARN_RATE);
        network.rebuild(num_inputs, num_hidden, num_outputs, rng);
        network
    }

    /// Builds a network from a config; `config.seed` makes the weights
    /// reproducible.
    pub fn from_config(config: &NetworkConfig) -> Network {
        let mut network = Network::unbuilt(config.target, config.activation, config.learn_rate);
        let (i, h, o) = (config.num_inputs, config.num_hidden, config.num_outputs);
        match config.seed {
            Some(seed) => network.rebuild(i, h, o, &mut StdRng::seed_from_u64(seed)),
            None => network.rebuild(i, h, o, &mut rand::thread_rng()),
        }
        network
    }

    fn unbuilt(target: f64, activation: ActivationKind, learn_rate: f64) -> Network {
        Network {
            input: Layer::default(),
            hidden: Layer::default(),
            output: Layer::default(),
            activation,
            target,
            learn_rate,
        }
    }

    /// Discards all three layers and rebuilds them with fresh random
    /// weights. Trained weights are lost; the learning rate is kept.
    pub fn reinit(
        &mut self,
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        target: f64,
        activation: ActivationKind,
    ) {
        self.target = target;
        self.activation = activation;
        self.rebuild(num_inputs, num_hidden, num_outputs, &mut rand::thread_rng());
    }

    fn rebuild<R: Rng + ?Sized>(
        &mut self,
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        rng: &mut R,
    ) {
        self.input = Layer::build(num_inputs, 0, rng);
        self.hidden = Layer::build(num_hidden, num_inputs, rng);
        self.output = Layer::build(num_outputs, num_hidden, rng);
        log::debug!("initialized {self}");
    }

    pub fn learn_rate(&self) -> f64 {
        self.learn_rate
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Layer sizes as `(input, hidden, output)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.input.len(), self.hidden.len(), self.output.len())
    }

    /// Value of the first output node from the last forward pass.
    pub fn output_value(&self) -> f64 {
        self.output.values[0]
    }

    /// Sets every weight in the network to `value`.
    pub fn fill_weights(&mut self, value: f64) {
        self.hidden.fill_weights(value);
        self.output.fill_weights(value);
    }

    /// Forward pass; returns the first output node's value.
    ///
    /// `inputs` is copied into the input layer in order. Input slots past
    /// `inputs.len()` keep whatever they held before.
    ///
    /// # Panics
    /// Panics if `inputs` is longer than the input layer, or if the output
    /// layer is empty.
    pub fn forward(&mut self, inputs: &[f64]) -> f64 {
        assert!(
            inputs.len() <= self.input.len(),
            "{} inputs given to a network with {} input nodes",
            inputs.len(),
            self.input.len()
        );
        self.input.values[..inputs.len()].copy_from_slice(inputs);

        let kind = self.activation;
        self.hidden.feed_from(&self.input, |x| kind.activate(x));
        self.output.feed_from(&self.hidden, |x| kind.activate(x));

        self.output_value()
    }

    /// Half squared difference between the target and the last output.
    pub fn error(&self) -> f64 {
        0.5 * (self.target - self.output_value()).powi(2)
    }

    /// Adjusts weights from the stored target and the last forward output.
    ///
    /// One scalar error is computed and reused for both weight groups
    /// (output then hidden); nothing is propagated between layers. For each
    /// node `k` of the layer owning the weights,
    /// `weight[w] += learn_rate * error * derivative(values[k]) * previous.values[w]`.
    pub fn backward(&mut self) {
        let error = self.error();
        log::trace!("backward: target {} output {} error {error}", self.target, self.output_value());

        adjust_weights(&mut self.output, &self.hidden, error, self.activation, self.learn_rate);
        adjust_weights(&mut self.hidden, &self.input, error, self.activation, self.learn_rate);
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, h, o) = self.shape();
        write!(f, "{i}-{h}-{o} network ({}, lr {})", self.activation, self.learn_rate)
    }
}

fn adjust_weights(layer: &mut Layer, previous: &Layer, error: f64, kind: ActivationKind, learn_rate: f64) {
    for (value, node) in layer.values.iter().zip(layer.weights.iter_mut()) {
        let delta = error * kind.derivative(*value);
        for (index, weight) in node.values.iter_mut().enumerate() {
            *weight += learn_rate * delta * previous.values[index];
        }
    }
}
