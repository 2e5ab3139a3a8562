//! Robots for the Rumble arena.

mod duck;
mod shooter;
mod target;

pub use duck::SittingDuck;
pub use shooter::Shooter;
pub use target::TrackedTarget;
