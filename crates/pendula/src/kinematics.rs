//! Positions, velocities and energies derived from angle trajectories.
//!
//! Every function here is a pure transform of sampled series. The pivot of
//! the upper link sits at the origin with `y` pointing up, so a pendulum at
//! rest has `y1 = −L1` and `y2 = −(L1 + L2)`.

use crate::Configuration;

/// Cartesian positions of both bobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    pub x1: Vec<f64>,
    pub y1: Vec<f64>,
    pub x2: Vec<f64>,
    pub y2: Vec<f64>,
}

/// Cartesian velocities of both bobs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Velocities {
    pub vx1: Vec<f64>,
    pub vy1: Vec<f64>,
    pub vx2: Vec<f64>,
    pub vy2: Vec<f64>,
}

/// Computes bob positions from link angles.
///
/// # Panics
///
/// Panics in debug builds if the series differ in length.
#[must_use]
pub fn positions(config: &Configuration, theta1: &[f64], theta2: &[f64]) -> Positions {
    debug_assert_eq!(theta1.len(), theta2.len(), "angle series must align");

    let l1 = config.l1().value;
    let l2 = config.l2().value;

    let mut out = Positions {
        x1: Vec::with_capacity(theta1.len()),
        y1: Vec::with_capacity(theta1.len()),
        x2: Vec::with_capacity(theta1.len()),
        y2: Vec::with_capacity(theta1.len()),
    };

    for (&theta1, &theta2) in theta1.iter().zip(theta2) {
        let x1 = l1 * theta1.sin();
        let y1 = -l1 * theta1.cos();
        out.x1.push(x1);
        out.y1.push(y1);
        out.x2.push(x1 + l2 * theta2.sin());
        out.y2.push(y1 - l2 * theta2.cos());
    }

    out
}

/// Differentiates every position series with respect to `time`.
#[must_use]
pub fn velocities(positions: &Positions, time: &[f64]) -> Velocities {
    Velocities {
        vx1: gradient(&positions.x1, time),
        vy1: gradient(&positions.y1, time),
        vx2: gradient(&positions.x2, time),
        vy2: gradient(&positions.y2, time),
    }
}

/// Numerical derivative of `values` sampled at strictly increasing `time`.
///
/// Interior points use the second-order central difference for uneven
/// spacing. With `hs = tᵢ − tᵢ₋₁` and `hd = tᵢ₊₁ − tᵢ`:
///
/// ```text
/// f′ᵢ = (hs²·fᵢ₊₁ + (hd² − hs²)·fᵢ − hd²·fᵢ₋₁) / (hs·hd·(hs + hd))
/// ```
///
/// The two endpoints use first-order one-sided differences. Fewer than two
/// samples carry no rate information and yield zeros.
///
/// # Panics
///
/// Panics in debug builds if the slices differ in length.
#[must_use]
pub fn gradient(values: &[f64], time: &[f64]) -> Vec<f64> {
    debug_assert_eq!(values.len(), time.len(), "series must align with time");

    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut out = Vec::with_capacity(n);
    out.push((values[1] - values[0]) / (time[1] - time[0]));

    for i in 1..n - 1 {
        let hs = time[i] - time[i - 1];
        let hd = time[i + 1] - time[i];
        out.push(
            (hs * hs * values[i + 1] + (hd * hd - hs * hs) * values[i] - hd * hd * values[i - 1])
                / (hs * hd * (hs + hd)),
        );
    }

    out.push((values[n - 1] - values[n - 2]) / (time[n - 1] - time[n - 2]));
    out
}

/// Gravitational potential energy, zero when both links hang straight down.
///
/// `P = M1·g·(y1 + L1) + M2·g·(y2 + L1 + L2)`
#[must_use]
pub fn potential_energy(config: &Configuration, positions: &Positions) -> Vec<f64> {
    let l1 = config.l1().value;
    let l2 = config.l2().value;
    let m1 = config.m1().value;
    let m2 = config.m2().value;
    let g = config.g().value;

    positions
        .y1
        .iter()
        .zip(&positions.y2)
        .map(|(&y1, &y2)| m1 * g * (y1 + l1) + m2 * g * (y2 + l1 + l2))
        .collect()
}

/// Kinetic energy of both bobs.
///
/// `K = ½·M1·(vx1² + vy1²) + ½·M2·(vx2² + vy2²)`
#[must_use]
pub fn kinetic_energy(config: &Configuration, velocities: &Velocities) -> Vec<f64> {
    let m1 = config.m1().value;
    let m2 = config.m2().value;

    let Velocities { vx1, vy1, vx2, vy2 } = velocities;
    (0..vx1.len())
        .map(|i| {
            0.5 * m1 * (vx1[i] * vx1[i] + vy1[i] * vy1[i])
                + 0.5 * m2 * (vx2[i] * vx2[i] + vy2[i] * vy2[i])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_2;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn config() -> Configuration {
        Configuration::from_si([1.0, 0.5], [3.0, 1.0], 9.81).unwrap()
    }

    #[test]
    fn rest_position_hangs_below_the_pivot() {
        let positions = positions(&config(), &[0.0], &[0.0]);

        assert_eq!(positions.x1, vec![0.0]);
        assert_eq!(positions.y1, vec![-1.0]);
        assert_eq!(positions.x2, vec![0.0]);
        assert_eq!(positions.y2, vec![-1.5]);
        assert_eq!(potential_energy(&config(), &positions), vec![0.0]);
    }

    #[test]
    fn horizontal_links_point_right() {
        let positions = positions(&config(), &[FRAC_PI_2], &[FRAC_PI_2]);

        assert_relative_eq!(positions.x1[0], 1.0);
        assert_abs_diff_eq!(positions.y1[0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(positions.x2[0], 1.5);
        assert_abs_diff_eq!(positions.y2[0], 0.0, epsilon = 1e-15);

        // Both bobs raised to the pivot height: 3·g·1 + 1·g·1.5.
        let potential = potential_energy(&config(), &positions);
        assert_relative_eq!(potential[0], 9.81 * 4.5, max_relative = 1e-12);
    }

    #[test]
    fn gradient_is_exact_for_quadratics_on_uneven_grids() {
        let time = [0.0, 0.1, 0.3, 0.35, 0.6, 1.0];
        let values: Vec<f64> = time.iter().map(|t| 3.0 * t * t - t + 2.0).collect();

        let rates = gradient(&values, &time);

        for i in 1..time.len() - 1 {
            assert_relative_eq!(rates[i], 6.0 * time[i] - 1.0, max_relative = 1e-9);
        }
        // One-sided ends see the secant slope.
        assert_relative_eq!(rates[0], (values[1] - values[0]) / 0.1, max_relative = 1e-12);
        assert_relative_eq!(rates[5], (values[5] - values[4]) / 0.4, max_relative = 1e-12);
    }

    #[test]
    fn gradient_of_short_series() {
        assert!(gradient(&[], &[]).is_empty());
        assert_eq!(gradient(&[4.0], &[0.0]), vec![0.0]);
        assert_eq!(gradient(&[1.0, 3.0], &[0.0, 0.5]), vec![4.0, 4.0]);
    }

    /// A bob on a uniformly rotating link moves at speed `L·ω`.
    #[test]
    fn uniform_rotation_speed() {
        let omega = 2.0;
        let time: Vec<f64> = (0..=200).map(|i| f64::from(i) * 0.001).collect();
        let theta: Vec<f64> = time.iter().map(|t| omega * t).collect();
        let zeros = vec![0.0; time.len()];

        let config = config();
        let velocities = velocities(&positions(&config, &theta, &zeros), &time);
        let kinetic = kinetic_energy(&config, &velocities);

        for i in 1..time.len() - 1 {
            let speed = velocities.vx1[i].hypot(velocities.vy1[i]);
            assert_relative_eq!(speed, omega, max_relative = 1e-6);
            // The lower link stays vertical, so both bobs share the velocity.
            assert_relative_eq!(kinetic[i], 0.5 * 4.0 * omega * omega, max_relative = 1e-5);
        }
    }
}
