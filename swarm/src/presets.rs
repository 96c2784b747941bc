use cgmath::{Point3, Vector3};
use rand::Rng;

use crate::{
    constants::{BASE_RADIUS, BASE_VELOCITY, RADIUS_SPREAD, VELOCITY_SPREAD},
    store::ParticleStore,
};

/// Launch configuration for the initial particle cloud.
#[derive(Debug, Clone)]
pub struct CloudParams {
    /// Mean displacement from the origin along x.
    pub base_radius: f32,
    /// Half-width of the uniform perturbation applied to each position axis.
    pub radius_spread: f32,
    /// Mean launch velocity along y.
    pub base_velocity: f32,
    /// Half-width of the uniform perturbation applied to the velocity axes.
    pub velocity_spread: f32,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            base_radius: BASE_RADIUS,
            radius_spread: RADIUS_SPREAD,
            base_velocity: BASE_VELOCITY,
            velocity_spread: VELOCITY_SPREAD,
        }
    }
}

/// Fill `store` with a launch cloud: a cluster around `(r0, 0, 0)` moving
/// along +y. The z velocity is left at zero on purpose, so the cloud starts
/// out in a planar launch pattern.
///
/// The random source is passed in so tests can inject a fixed seed;
/// production callers pass `rand::rng()`, which differs between runs.
pub fn seed_cloud(store: &mut ParticleStore, params: &CloudParams, rng: &mut impl Rng) {
    log::info!("seeding {} particles", store.len());

    let mut draw = |base: f32, spread: f32| base + spread * rng.random_range(-1.0f32..=1.0);
    for i in 0..store.len() {
        store.set_position(
            i,
            Point3::new(
                draw(params.base_radius, params.radius_spread),
                draw(0.0, params.radius_spread),
                draw(0.0, params.radius_spread),
            ),
        );
        store.set_velocity(
            i,
            Vector3::new(
                draw(0.0, params.velocity_spread),
                draw(params.base_velocity, params.velocity_spread),
                0.0,
            ),
        );
    }
}
