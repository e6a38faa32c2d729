//! Chaotic attractors
//!
//! Forward (explicit) Euler integration of the Lorenz and Rössler systems
//! from a fixed initial state, emitting one trajectory point per step.
//! Accumulated floating-point drift is expected; chaotic systems amplify
//! any difference in arithmetic, so only the qualitative shape is stable
//! across platforms.

use super::{require_finite, GenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChaosKind {
    Lorenz,
    Rossler,
}

impl ChaosKind {
    pub const ALL: [ChaosKind; 2] = [ChaosKind::Lorenz, ChaosKind::Rossler];

    pub fn name(&self) -> &'static str {
        match self {
            ChaosKind::Lorenz => "lorenz",
            ChaosKind::Rossler => "rossler",
        }
    }

    /// Parse a system name. Unknown names fall back to Lorenz.
    pub fn from_name(name: &str) -> Self {
        match name {
            "lorenz" => ChaosKind::Lorenz,
            "rossler" => ChaosKind::Rossler,
            other => {
                tracing::warn!("unknown chaos system '{}', defaulting to lorenz", other);
                ChaosKind::Lorenz
            }
        }
    }

    /// Display scale applied to emitted points so both attractors fit the
    /// same viewport.
    fn display_scale(&self) -> f64 {
        match self {
            ChaosKind::Lorenz => 0.1,
            ChaosKind::Rossler => 0.5,
        }
    }
}

const INITIAL_STATE: [f64; 3] = [0.1, 0.0, 0.0];
const BASE_DT: f64 = 0.01;

// Rössler uses fixed internal constants; the σ/ρ/β slots are Lorenz-only.
const ROSSLER_A: f64 = 0.2;
const ROSSLER_B: f64 = 0.2;
const ROSSLER_C: f64 = 5.7;

fn derivative(kind: ChaosKind, s: [f64; 3], sigma: f64, rho: f64, beta: f64) -> [f64; 3] {
    let [x, y, z] = s;
    match kind {
        ChaosKind::Lorenz => [sigma * (y - x), x * (rho - z) - y, x * y - beta * z],
        ChaosKind::Rossler => [-y - z, x + ROSSLER_A * y, ROSSLER_B + z * (x - ROSSLER_C)],
    }
}

/// Integrate a trajectory of `steps` points with dt = 0.01·speed.
pub fn integrate_chaos(
    kind: ChaosKind,
    sigma: f64,
    rho: f64,
    beta: f64,
    speed: f64,
    steps: u32,
) -> Result<Vec<[f32; 3]>, GenError> {
    if steps == 0 {
        return Err(GenError::invalid("steps", "must be positive"));
    }
    require_finite("sigma", sigma)?;
    require_finite("rho", rho)?;
    require_finite("beta", beta)?;
    require_finite("speed", speed)?;
    if speed <= 0.0 {
        return Err(GenError::invalid("speed", format!("must be positive, got {speed}")));
    }

    let dt = BASE_DT * speed;
    let scale = kind.display_scale();
    let mut state = INITIAL_STATE;
    let mut trajectory = Vec::with_capacity(steps as usize);

    for _ in 0..steps {
        let d = derivative(kind, state, sigma, rho, beta);
        state[0] += d[0] * dt;
        state[1] += d[1] * dt;
        state[2] += d[2] * dt;
        trajectory.push([
            (state[0] * scale) as f32,
            (state[1] * scale) as f32,
            (state[2] * scale) as f32,
        ]);
    }

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lorenz_stays_bounded_and_finite() {
        let traj = integrate_chaos(ChaosKind::Lorenz, 10.0, 28.0, 8.0 / 3.0, 1.0, 1000).unwrap();
        assert_eq!(traj.len(), 1000);
        for p in &traj {
            for c in p {
                assert!(c.is_finite());
                assert!(c.abs() < 1000.0);
            }
        }
    }

    #[test]
    fn rossler_stays_bounded_and_finite() {
        let traj = integrate_chaos(ChaosKind::Rossler, 10.0, 28.0, 8.0 / 3.0, 1.0, 2000).unwrap();
        assert_eq!(traj.len(), 2000);
        for p in &traj {
            for c in p {
                assert!(c.is_finite());
                assert!(c.abs() < 1000.0);
            }
        }
    }

    #[test]
    fn trajectory_preserves_time_order() {
        // Re-integrating a prefix must reproduce the same leading points.
        let long = integrate_chaos(ChaosKind::Lorenz, 10.0, 28.0, 8.0 / 3.0, 1.0, 500).unwrap();
        let short = integrate_chaos(ChaosKind::Lorenz, 10.0, 28.0, 8.0 / 3.0, 1.0, 100).unwrap();
        assert_eq!(&long[..100], &short[..]);
    }

    #[test]
    fn zero_steps_rejected() {
        assert!(integrate_chaos(ChaosKind::Lorenz, 10.0, 28.0, 2.67, 1.0, 0).is_err());
    }

    #[test]
    fn non_finite_parameters_rejected() {
        assert!(integrate_chaos(ChaosKind::Lorenz, f64::NAN, 28.0, 2.67, 1.0, 10).is_err());
        assert!(integrate_chaos(ChaosKind::Lorenz, 10.0, 28.0, 2.67, 0.0, 10).is_err());
    }

    #[test]
    fn integration_is_idempotent() {
        let a = integrate_chaos(ChaosKind::Rossler, 0.0, 0.0, 0.0, 1.5, 300).unwrap();
        let b = integrate_chaos(ChaosKind::Rossler, 0.0, 0.0, 0.0, 1.5, 300).unwrap();
        assert_eq!(a, b);
    }
}
