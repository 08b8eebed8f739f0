//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - suggested view bound for the viewer
//!
//! Construction is the only place input validation happens: a bad timestep,
//! a non-positive orbital radius, or a duplicate body name is rejected here,
//! before any steps execute. Numerical blow-up during the run is not an
//! error (see `forces::CentralGravity`).
//!
//! `Scenario::run` executes the whole fixed-step batch up front and returns
//! the recorded `TrajectoryHistory`; the viewer only ever replays that data.

use std::collections::HashSet;

use bevy::prelude::Resource;
use thiserror::Error;

use crate::configuration::config::{ScenarioConfig, BodyConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, Body, NVec2, Appearance};
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::history::TrajectoryHistory;

/// Fallback for `parameters.view_margin` when the YAML leaves it out
const DEFAULT_VIEW_MARGIN: f64 = 1.2;

/// Rejected scenario configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("timestep must be positive, got {0}")]
    NonPositiveTimestep(f64),

    #[error("body {name:?} has non-positive orbital radius {r}")]
    NonPositiveRadius { name: String, r: f64 },

    #[error("duplicate body name {0:?}")]
    DuplicateName(String),
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the parameters, current system state, and the set of active
/// force laws (accelerations)
///
/// In Bevy terms, this is inserted as a `Resource` and then read by the
/// viewer systems for body names, appearance, and framing
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub view_bound: f64, // suggested framing half-extent, world units
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            central_mass: p_cfg.central_mass,
            h0: p_cfg.h0,
            steps: p_cfg.steps,
            view_margin: p_cfg.view_margin.unwrap_or(DEFAULT_VIEW_MARGIN),
        };

        if parameters.h0 <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(parameters.h0));
        }

        let mu = parameters.mu();

        // Bodies: map `BodyConfig` -> runtime `Body` on the circular-orbit
        // initial condition: on the x-axis at distance r, moving
        // perpendicular at the circular speed sqrt(mu / r)
        let mut seen = HashSet::new();
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let BodyConfig { name, r, m, color, size } = bc;

            if *r <= 0.0 {
                return Err(ConfigError::NonPositiveRadius { name: name.clone(), r: *r });
            }
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }

            bodies.push(Body {
                name: name.clone(),
                x: NVec2::new(*r, 0.0),
                v: NVec2::new(0.0, (mu / r).sqrt()),
                m: *m,
                appearance: Appearance {
                    color: color.clone(),
                    size: *size,
                },
            });
        }

        // Suggested framing: the widest initial orbit plus margin
        let max_r = cfg.bodies.iter().map(|bc| bc.r).fold(0.0, f64::max);
        let view_bound = max_r * parameters.view_margin;

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            t: 0.0,
        };

        // Forces: construct an AccelSet and register central gravity
        let mut forces = AccelSet::new();
        forces = forces.with(CentralGravity { mu });

        Ok(Self {
            parameters,
            system,
            forces,
            view_bound,
        })
    }

    /// Run the whole simulation batch: `parameters.steps` fixed Euler steps,
    /// recording every body's position after each step
    ///
    /// Never fails: trajectories that fall into the center blow up into
    /// extreme or non-finite values and keep going, they do not halt the run
    pub fn run(&mut self) -> TrajectoryHistory {
        let mut history = TrajectoryHistory::new(
            self.system.bodies.len(),
            self.parameters.steps as usize,
        );

        for _ in 0..self.parameters.steps {
            euler_integrator(&mut self.system, &self.forces, &self.parameters);
            history.record(&self.system);
        }

        history
    }
}
