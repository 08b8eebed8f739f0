//! Core state types for the orbital simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` – one orbiting object (position, velocity, mass, appearance)
//! - `System` – the list of bodies and the current simulation time `t`
//!
//! The central body never appears here: it is fixed at the origin and enters
//! the simulation only through its gravitational parameter (see `forces`).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Render-only styling for a body. Opaque to the simulation core; the
/// viewer decides what a color name or marker size means on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub color: String, // color name, e.g. "blue"
    pub size: f64,     // marker size; the viewer maps size/10 to pixels
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // unique identifier
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass; carried through but not part of the force law
    pub appearance: Appearance, // passed through to the viewer
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of orbiting bodies
    pub t: f64, // time
}
