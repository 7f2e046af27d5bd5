use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

/// Logistic sigmoid: `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid, taking the already-activated value `a = sigmoid(x)`.
pub fn sigmoid_derivative(a: f64) -> f64 {
    a * (1.0 - a)
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of tanh, taking the already-activated value `a = tanh(x)`.
pub fn tanh_derivative(a: f64) -> f64 {
    1.0 - a * a
}

pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// Derivative of ReLU. The sign of the activated value matches the sign of
/// the pre-activation sum, so either may be passed.
pub fn relu_derivative(a: f64) -> f64 {
    if a > 0.0 { 1.0 } else { 0.0 }
}

/// The nonlinearity applied to every hidden and output node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    #[default]
    Sigmoid,
    #[serde(rename = "relu")]
    ReLU,
    Tanh,
}

impl ActivationKind {
    /// Applies the activation to a weighted sum.
    pub fn activate(&self, x: f64) -> f64 {
        match self {
            ActivationKind::Sigmoid => sigmoid(x),
            ActivationKind::ReLU => relu(x),
            ActivationKind::Tanh => tanh(x),
        }
    }

    /// Derivative of the activation, evaluated at an activated node value
    /// (the output of [`ActivationKind::activate`], not the raw sum).
    pub fn derivative(&self, a: f64) -> f64 {
        match self {
            ActivationKind::Sigmoid => sigmoid_derivative(a),
            ActivationKind::ReLU => relu_derivative(a),
            ActivationKind::Tanh => tanh_derivative(a),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::ReLU => "relu",
            ActivationKind::Tanh => "tanh",
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sigmoid" => Ok(ActivationKind::Sigmoid),
            "relu" => Ok(ActivationKind::ReLU),
            "tanh" => Ok(ActivationKind::Tanh),
            other => Err(format!("unknown activation '{other}' (expected sigmoid, relu or tanh)")),
        }
    }
}
