//! Energy bookkeeping for a chaotic double pendulum.
//!
//! Solves a pendulum with a heavy upper bob and prints kinetic, potential and
//! total energy twice a second. The total should stay flat while energy
//! sloshes between the two forms.
//!
//! # Usage
//!
//! ```text
//! cargo run --example energy
//! cargo run --example energy -- degrees
//! ```

use std::error::Error;

use pendula::{Configuration, Session};

fn main() -> Result<(), Box<dyn Error>> {
    let unit = std::env::args().nth(1).unwrap_or_else(|| "radians".into());
    let initial = match unit.as_str() {
        "degrees" => (5.7, 17.2, 28.6, 45.8),
        _ => (0.1, 0.3, 0.5, 0.8),
    };

    let config = Configuration::from_si([1.0, 0.5], [3.0, 1.0], 9.81)?;
    let mut session = Session::new(config);
    let trajectory = session.solve(initial, 10.0, 0.016, unit.as_str())?;

    println!(
        "{} samples, {} accepted steps",
        trajectory.len(),
        trajectory.stats().accepted_steps
    );
    println!("{:>7} {:>10} {:>10} {:>10}", "t", "K", "P", "total");

    let every = (0.5 / trajectory.step()).round().max(1.0) as usize;
    let time = trajectory.time();
    let kinetic = trajectory.kinetic();
    let potential = trajectory.potential();
    let total = trajectory.total_energy();

    for i in (0..trajectory.len()).step_by(every) {
        println!(
            "{:>7.3} {:>10.5} {:>10.5} {:>10.5}",
            time[i], kinetic[i], potential[i], total[i]
        );
    }

    Ok(())
}
