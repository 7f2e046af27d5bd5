use decision_net::{ActivationKind, Network};

/// A toy agent steers toward a goal: inputs are the normalized distance and
/// bearing to the goal, and the network output is read as a throttle value.
/// The host refreshes the target every tick before training.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut network = Network::init(2, 2, 1, 0.0, ActivationKind::Sigmoid);

    let mut distance: f64 = 1.0;
    for tick in 0..200 {
        let bearing = (tick as f64 * 0.05).sin();
        let throttle = network.forward(&[distance, bearing]);

        // full throttle when far away, coast when close
        network.set_target(distance.clamp(0.0, 1.0));
        network.backward();

        distance = (distance - throttle * 0.01).max(0.0);
        if tick % 20 == 0 {
            println!(
                "tick {tick:>3}: distance {distance:.3} bearing {bearing:+.3} throttle {throttle:.4} error {:.6}",
                network.error()
            );
        }
    }

    match network.to_json() {
        Ok(json) => println!("final snapshot:\n{json}"),
        Err(e) => eprintln!("could not serialize network: {e}"),
    }
}
