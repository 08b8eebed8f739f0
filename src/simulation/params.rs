//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and central mass (`G`, `central_mass`),
//! - fixed integration step size and step count (`h0`, `steps`),
//! - view margin used to suggest a framing bound to the viewer

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub central_mass: f64, // mass of the central body
    pub h0: f64, // step size
    pub steps: u32, // number of integration steps
    pub view_margin: f64, // view bound = max orbital radius * view_margin
}

impl Parameters {
    /// Gravitational parameter of the central body, `mu = G * M`.
    pub fn mu(&self) -> f64 {
        self.G * self.central_mass
    }
}
