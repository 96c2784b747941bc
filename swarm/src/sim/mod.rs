use cgmath::Point3;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{
    constants::{GRAVITY, MAX_THREADS, PARTICLES_PER_THREAD, SOFTENING},
    store::ParticleStore,
};

mod direct;

/// Reusable per-particle acceleration accumulator, one lane per axis.
///
/// Allocated once and cleared by the integration pass every step, so the
/// steady-state loop does not allocate.
pub struct AccelScratch {
    pub ax: Vec<f32>,
    pub ay: Vec<f32>,
    pub az: Vec<f32>,
}

impl AccelScratch {
    pub fn zeroed(count: usize) -> Self {
        Self {
            ax: vec![0.0; count],
            ay: vec![0.0; count],
            az: vec![0.0; count],
        }
    }
}

/// Per-step acceleration source.
///
/// Accumulation runs before any position is written for the step, so every
/// implementation sees a consistent snapshot of where the particles were at
/// the end of the previous step.
pub trait AccelModel {
    fn accumulate(&mut self, store: &ParticleStore, acc: &mut AccelScratch);

    fn accumulate_single_threaded(&mut self, store: &ParticleStore, acc: &mut AccelScratch);
}

/// No inter-particle force: particles keep whatever velocity they were
/// launched with.
pub struct FreeDrift;

impl AccelModel for FreeDrift {
    fn accumulate(&mut self, _store: &ParticleStore, _acc: &mut AccelScratch) {}

    fn accumulate_single_threaded(&mut self, _store: &ParticleStore, _acc: &mut AccelScratch) {}
}

/// All-pairs inverse-square attraction between unit-mass particles.
///
/// O(N^2) per step, which dominates the frame once the population reaches
/// the low thousands.
pub struct DirectGravity {
    pub g: f32,
    pub eps: f32,
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self {
            g: GRAVITY,
            eps: SOFTENING,
        }
    }
}

impl AccelModel for DirectGravity {
    fn accumulate(&mut self, store: &ParticleStore, acc: &mut AccelScratch) {
        direct::iter(store, acc, self.g, self.eps);
    }

    fn accumulate_single_threaded(&mut self, store: &ParticleStore, acc: &mut AccelScratch) {
        direct::iter_single_threaded(store, acc, self.g, self.eps);
    }
}

fn compute_target_threads(n_particles: usize) -> usize {
    n_particles
        .div_ceil(PARTICLES_PER_THREAD)
        .clamp(1, MAX_THREADS)
}

/// Owner of everything one step needs: the state store, the acceleration
/// scratch, the worker pool and the force model.
pub struct Swarm<M> {
    store: ParticleStore,
    scratch: AccelScratch,
    pool: ThreadPool,
    model: M,
}

impl<M: AccelModel + Send> Swarm<M> {
    pub fn new(store: ParticleStore, model: M) -> Self {
        let scratch = AccelScratch::zeroed(store.len());
        let n_threads = compute_target_threads(store.len());

        Self {
            store,
            scratch,
            pool: ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .build()
                .unwrap(),
            model,
        }
    }

    /// Advance every particle by one step of length `tau`.
    ///
    /// Accelerations are accumulated against the positions of the previous
    /// step, then each velocity is kicked and each position drifted with the
    /// just-updated velocity (semi-implicit Euler). The call returns only
    /// once all particles have been updated.
    pub fn advance(&mut self, tau: f32) {
        debug_assert!(tau.is_finite() && tau > 0.0, "bad timestep {tau}");

        self.pool.install(|| {
            self.model.accumulate(&self.store, &mut self.scratch);
            direct::par_kick_drift(self.store.axes_mut(), &mut self.scratch, tau);
        });
    }

    /// Current position of particle `i`, for the host to mirror onto its
    /// visual transform. Panics if `i` is out of range.
    pub fn position(&self, i: usize) -> Point3<f32> {
        self.store.position(i)
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }
}
