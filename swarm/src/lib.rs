pub mod constants;
mod presets;
mod sim;
mod store;

pub use presets::{CloudParams, seed_cloud};
pub use sim::{AccelModel, AccelScratch, DirectGravity, FreeDrift, Swarm};
pub use store::{AllocationError, ParticleStore};
