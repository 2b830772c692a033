use std::{sync::OnceLock, time::Duration};

use pendula_solvers::transient::dopri5::{Solution, Stats, Status};

use crate::{
    Configuration, State,
    kinematics::{self, Positions, Velocities},
};

/// One frame of a pendulum animation.
///
/// `joints` traces the pendulum from the pivot through both bobs:
/// `[(0, 0), (x1, y1), (x2, y2)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub joints: [(f64, f64); 3],
}

/// The solved motion of a double pendulum.
///
/// Samples start at `t = 0`, are spaced by the requested step and end at
/// the requested duration, so the last interval may be shorter. A
/// trajectory never changes once built; derived series are computed on first
/// access and kept for later calls.
#[derive(Debug)]
pub struct Trajectory {
    config: Configuration,
    step: f64,
    status: Status,
    stats: Stats,
    time: Vec<f64>,
    theta1: Vec<f64>,
    omega1: Vec<f64>,
    theta2: Vec<f64>,
    omega2: Vec<f64>,
    derived: OnceLock<Derived>,
}

#[derive(Debug)]
struct Derived {
    positions: Positions,
    velocities: Velocities,
    kinetic: Vec<f64>,
    potential: Vec<f64>,
    total: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn from_solution(config: Configuration, step: f64, solution: Solution<4>) -> Self {
        let n = solution.points.len();
        let mut trajectory = Self {
            config,
            step,
            status: solution.status,
            stats: solution.stats,
            time: Vec::with_capacity(n),
            theta1: Vec::with_capacity(n),
            omega1: Vec::with_capacity(n),
            theta2: Vec::with_capacity(n),
            omega2: Vec::with_capacity(n),
            derived: OnceLock::new(),
        };

        for point in solution.points {
            let [theta1, omega1, theta2, omega2] = point.y;
            trajectory.time.push(point.t);
            trajectory.theta1.push(theta1);
            trajectory.omega1.push(omega1);
            trajectory.theta2.push(theta2);
            trajectory.omega2.push(omega2);
        }

        trajectory
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if the trajectory holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns the configuration the trajectory was solved with.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Returns the requested step, the spacing of all but the last sample.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the wall-clock time between animation frames for real-time
    /// playback.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.step).unwrap_or(Duration::MAX)
    }

    /// Returns how the solver terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the solver's work counters.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Returns the state at sample `index`.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<State> {
        Some(State::new(
            *self.theta1.get(index)?,
            self.omega1[index],
            self.theta2[index],
            self.omega2[index],
        ))
    }

    /// Returns the sample times.
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Returns the angle of the upper link at each sample.
    #[must_use]
    pub fn theta1(&self) -> &[f64] {
        &self.theta1
    }

    /// Returns the angular velocity of the upper link.
    #[must_use]
    pub fn omega1(&self) -> &[f64] {
        &self.omega1
    }

    /// Returns the angle of the lower link at each sample.
    #[must_use]
    pub fn theta2(&self) -> &[f64] {
        &self.theta2
    }

    /// Returns the angular velocity of the lower link.
    #[must_use]
    pub fn omega2(&self) -> &[f64] {
        &self.omega2
    }

    /// Returns the horizontal position of the upper bob.
    #[must_use]
    pub fn x1(&self) -> &[f64] {
        &self.derived().positions.x1
    }

    /// Returns the vertical position of the upper bob.
    #[must_use]
    pub fn y1(&self) -> &[f64] {
        &self.derived().positions.y1
    }

    /// Returns the horizontal position of the lower bob.
    #[must_use]
    pub fn x2(&self) -> &[f64] {
        &self.derived().positions.x2
    }

    /// Returns the vertical position of the lower bob.
    #[must_use]
    pub fn y2(&self) -> &[f64] {
        &self.derived().positions.y2
    }

    /// Returns the horizontal velocity of the upper bob.
    #[must_use]
    pub fn vx1(&self) -> &[f64] {
        &self.derived().velocities.vx1
    }

    /// Returns the vertical velocity of the upper bob.
    #[must_use]
    pub fn vy1(&self) -> &[f64] {
        &self.derived().velocities.vy1
    }

    /// Returns the horizontal velocity of the lower bob.
    #[must_use]
    pub fn vx2(&self) -> &[f64] {
        &self.derived().velocities.vx2
    }

    /// Returns the vertical velocity of the lower bob.
    #[must_use]
    pub fn vy2(&self) -> &[f64] {
        &self.derived().velocities.vy2
    }

    /// Returns the kinetic energy of both bobs at each sample.
    #[must_use]
    pub fn kinetic(&self) -> &[f64] {
        &self.derived().kinetic
    }

    /// Returns the potential energy relative to the hanging rest position.
    #[must_use]
    pub fn potential(&self) -> &[f64] {
        &self.derived().potential
    }

    /// Returns kinetic plus potential energy at each sample.
    #[must_use]
    pub fn total_energy(&self) -> &[f64] {
        &self.derived().total
    }

    /// Returns the animation frames, one per sample.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = Frame> + '_ {
        let Positions { x1, y1, x2, y2 } = &self.derived().positions;
        (0..self.len()).map(move |i| Frame {
            t: self.time[i],
            joints: [(0.0, 0.0), (x1[i], y1[i]), (x2[i], y2[i])],
        })
    }

    fn derived(&self) -> &Derived {
        self.derived.get_or_init(|| {
            let positions = kinematics::positions(&self.config, &self.theta1, &self.theta2);
            let velocities = kinematics::velocities(&positions, &self.time);
            let kinetic = kinematics::kinetic_energy(&self.config, &velocities);
            let potential = kinematics::potential_energy(&self.config, &positions);
            let total = kinetic.iter().zip(&potential).map(|(k, p)| k + p).collect();

            Derived {
                positions,
                velocities,
                kinetic,
                potential,
                total,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pendula_solvers::transient::dopri5::Point;

    fn swinging(config: Configuration) -> Trajectory {
        let points = (0..5)
            .map(|i| {
                let t = f64::from(i) * 0.5;
                Point {
                    t,
                    y: [0.1 * t, 0.1, 0.0, 0.0],
                }
            })
            .collect();
        let solution = Solution {
            status: Status::Complete,
            points,
            stats: Stats::default(),
        };
        Trajectory::from_solution(config, 0.5, solution)
    }

    #[test]
    fn unpacks_solver_points() {
        let trajectory = swinging(Configuration::default());

        assert_eq!(trajectory.len(), 5);
        assert_eq!(trajectory.time(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(trajectory.omega1(), &[0.1; 5]);
        assert_eq!(trajectory.theta2(), &[0.0; 5]);
        assert_eq!(trajectory.state(2), Some(State::new(0.1, 0.1, 0.0, 0.0)));
        assert_eq!(trajectory.state(5), None);
        assert_eq!(trajectory.frame_interval(), Duration::from_millis(500));
    }

    #[test]
    fn derived_series_align_with_time() {
        let trajectory = swinging(Configuration::default());

        for series in [
            trajectory.x1(),
            trajectory.y1(),
            trajectory.x2(),
            trajectory.y2(),
            trajectory.vx1(),
            trajectory.vy1(),
            trajectory.vx2(),
            trajectory.vy2(),
            trajectory.kinetic(),
            trajectory.potential(),
            trajectory.total_energy(),
        ] {
            assert_eq!(series.len(), trajectory.len());
        }
    }

    #[test]
    fn frames_start_at_the_pivot() {
        let trajectory = swinging(Configuration::default());
        let frames: Vec<Frame> = trajectory.frames().collect();

        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].joints, [(0.0, 0.0), (0.0, -1.0), (0.0, -2.0)]);
        assert_eq!(frames[3].t, 1.5);
        assert_eq!(frames[3].joints[1], (trajectory.x1()[3], trajectory.y1()[3]));
    }
}
