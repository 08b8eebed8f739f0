pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2, Appearance};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::history::TrajectoryHistory;
pub use simulation::scenario::{Scenario, ConfigError};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::solsim_vis2d::run_2d;
