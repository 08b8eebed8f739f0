//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial orbit and appearance for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 6.6743e-11           # gravitational constant
//!   central_mass: 1.989e30  # mass of the central body, kg
//!   h0: 21600.0             # fixed step size, seconds
//!   steps: 3000             # number of integration steps
//!   view_margin: 1.2        # framing = widest orbit * view_margin
//!
//! bodies:
//!   - name: "Earth"
//!     r: 149.6e9            # initial orbital radius, m
//!     m: 5.97e24            # body mass, kg (not part of the force law)
//!     color: "blue"
//!     size: 30.0
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; see `simulation::scenario`, which also validates it.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,             // gravitational constant
    pub central_mass: f64,  // mass of the central body
    pub h0: f64,            // fixed time step size
    pub steps: u32,         // number of steps; unsigned, so never negative
    pub view_margin: Option<f64>, // framing margin, defaults to 1.2
}

/// Configuration for a single body's initial orbit
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // unique body name
    pub r: f64,       // initial orbital radius around the central body
    pub m: f64,       // mass of the body; stored, not used in the force law
    pub color: String, // marker/trail color name, viewer-interpreted
    pub size: f64,    // marker size, viewer-interpreted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state of the system
}
