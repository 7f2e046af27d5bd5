//! Drives a network the way a game host would: one forward pass per
//! simulation tick, optionally followed by a backward pass.
//!
//! Run with:
//!   cargo run -- --inputs 4 --ticks 20 --save brain.json
//!   RUST_LOG=debug cargo run -- --load brain.json --no-train

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use decision_net::{ActivationKind, Network, NetworkConfig};

#[derive(Parser, Debug)]
#[command(name = "decision-net", about = "Run a three-layer decision network over simulated ticks")]
struct Cli {
    /// JSON network config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Resume from a saved snapshot instead of building a new network
    #[arg(long, conflicts_with = "config")]
    load: Option<PathBuf>,

    /// Write the network snapshot here after the last tick
    #[arg(long)]
    save: Option<PathBuf>,

    #[arg(long, conflicts_with = "load")]
    inputs: Option<usize>,

    /// Hidden nodes; defaults to two thirds of inputs plus outputs
    #[arg(long, conflicts_with = "load")]
    hidden: Option<usize>,

    #[arg(long)]
    target: Option<f64>,

    #[arg(long)]
    activation: Option<ActivationKind>,

    #[arg(long, conflicts_with = "load")]
    seed: Option<u64>,

    #[arg(long, default_value_t = 10)]
    ticks: usize,

    /// Only run forward passes
    #[arg(long)]
    no_train: bool,
}

fn build_config(cli: &Cli) -> Result<NetworkConfig> {
    let mut config = match &cli.config {
        Some(path) => NetworkConfig::load_json(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => {
            let inputs = cli.inputs.unwrap_or(3);
            NetworkConfig::new(inputs, NetworkConfig::suggested_hidden(inputs, 1), 1, 1.0, ActivationKind::Sigmoid)
        }
    };

    if let Some(inputs) = cli.inputs {
        config.num_inputs = inputs;
        if cli.hidden.is_none() && cli.config.is_none() {
            config.num_hidden = NetworkConfig::suggested_hidden(inputs, config.num_outputs);
        }
    }
    if let Some(hidden) = cli.hidden {
        config.num_hidden = hidden;
    }
    if let Some(target) = cli.target {
        config.target = target;
    }
    if let Some(kind) = cli.activation {
        config.activation = kind;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

/// Deterministic stand-in for per-tick sensor readings, each in [-1, 1].
fn sensor_inputs(tick: usize, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| (tick as f64 * 0.3 + i as f64 * 1.7).sin())
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let mut network = match &cli.load {
        Some(path) => {
            let mut network = Network::load(path)
                .with_context(|| format!("loading snapshot {}", path.display()))?;
            if let Some(target) = cli.target {
                network.set_target(target);
            }
            if let Some(kind) = cli.activation {
                network.activation = kind;
            }
            network
        }
        None => Network::from_config(&build_config(&cli)?),
    };

    let (num_inputs, num_hidden, num_outputs) = network.shape();
    info!(
        "network {num_inputs}-{num_hidden}-{num_outputs}, activation {}, target {}, lr {}",
        network.activation,
        network.target,
        network.learn_rate()
    );

    for tick in 0..cli.ticks {
        let inputs = sensor_inputs(tick, num_inputs);
        let output = network.forward(&inputs);
        let error = network.error();
        if !cli.no_train {
            network.backward();
        }
        info!("tick {tick:>4}: output {output:.6} error {error:.6}");
    }

    if let Some(path) = &cli.save {
        network
            .save(path)
            .with_context(|| format!("saving snapshot {}", path.display()))?;
        info!("snapshot written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_build_suggested_shape() {
        let cli = Cli::parse_from(["decision-net", "--inputs", "5"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.num_inputs, 5);
        assert_eq!(config.num_hidden, 4);
        assert_eq!(config.num_outputs, 1);
    }

    #[test]
    fn cli_overrides_apply() {
        let cli = Cli::parse_from([
            "decision-net", "--hidden", "7", "--target", "0.3", "--activation", "relu", "--seed", "5",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.num_hidden, 7);
        assert_eq!(config.target, 0.3);
        assert_eq!(config.activation, ActivationKind::ReLU);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn shape_flags_conflict_with_load() {
        for flag in ["--inputs", "--hidden", "--seed"] {
            let result = Cli::try_parse_from(["decision-net", "--load", "brain.json", flag, "3"]);
            assert!(result.is_err(), "{flag} was accepted alongside --load");
        }
        let cli = Cli::try_parse_from(["decision-net", "--load", "brain.json", "--target", "0.4"]).unwrap();
        assert_eq!(cli.target, Some(0.4));
    }

    #[test]
    fn sensor_inputs_stay_in_range() {
        for tick in 0..50 {
            let inputs = sensor_inputs(tick, 6);
            assert_eq!(inputs.len(), 6);
            assert!(inputs.iter().all(|x| (-1.0..=1.0).contains(x)));
        }
    }
}
