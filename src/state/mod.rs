pub mod confetti;
pub mod touch;

pub use confetti::{spawn_particles, ConfettiShape, Particle};
pub use touch::{to_local, TouchState};
