// PHYSICAL
/// Fixed timestep advanced per integration call.
pub const TAU: f32 = 0.1;
/// Attraction coupling between particles, in simulation units.
pub const GRAVITY: f32 = 1.0;
/// Softening added to the cubed distance to avoid division by zero.
pub const SOFTENING: f32 = 1e-3;

// LAUNCH
/// Mean displacement of the cloud from the origin, along the x axis.
pub const BASE_RADIUS: f32 = 40.0;
/// Half-width of the uniform perturbation on each position axis.
pub const RADIUS_SPREAD: f32 = 10.0;
/// Mean launch velocity, along the y axis.
pub const BASE_VELOCITY: f32 = 8.0;
/// Half-width of the uniform perturbation on the velocity axes.
pub const VELOCITY_SPREAD: f32 = 2.0;

// SIMULATION
/// Number of particles in the default population.
pub const N_PARTICLES: usize = 2000;
/// Hard cap on number of threads to use.
pub const MAX_THREADS: usize = 20;
/// Minimum number of particles per thread. Each particle costs O(N) in the
/// all-pairs pass, so batches are much smaller than they would be for a
/// linear-cost update.
pub const PARTICLES_PER_THREAD: usize = 256;
/// Use free drift above this population; all-pairs attraction is O(N^2).
pub const DIRECT_GRAVITY_CUTOFF: usize = 4096;
