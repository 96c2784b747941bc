use std::collections::TryReserveError;
use std::fmt;

use cgmath::{Point3, Vector3};

/// Memory for the particle sequences could not be obtained. Fatal: a
/// simulation cannot run without its state.
#[derive(Debug)]
pub struct AllocationError {
    count: usize,
    source: TryReserveError,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate state for {} particles", self.count)
    }
}

impl std::error::Error for AllocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Owner of the kinematic state for a fixed particle population.
///
/// Positions and velocities live in six parallel `f32` sequences, one per
/// scalar component, so the update loop can work on contiguous lanes. Index
/// `i` refers to the same logical particle in every sequence for the whole
/// run; the host keys its visual transforms by the same index.
pub struct ParticleStore {
    x: Vec<f32>,
    y: Vec<f32>,
    z: Vec<f32>,
    vx: Vec<f32>,
    vy: Vec<f32>,
    vz: Vec<f32>,
}

/// Split borrow of all six sequences for the in-place update pass.
pub(crate) struct AxesMut<'a> {
    pub x: &'a mut [f32],
    pub y: &'a mut [f32],
    pub z: &'a mut [f32],
    pub vx: &'a mut [f32],
    pub vy: &'a mut [f32],
    pub vz: &'a mut [f32],
}

impl ParticleStore {
    /// Allocate six zero-initialized sequences of length `count`.
    pub fn create(count: usize) -> Result<Self, AllocationError> {
        fn sequence(count: usize) -> Result<Vec<f32>, TryReserveError> {
            let mut seq = Vec::new();
            seq.try_reserve_exact(count)?;
            seq.resize(count, 0.0);
            Ok(seq)
        }

        let err = |source| AllocationError { count, source };
        Ok(Self {
            x: sequence(count).map_err(err)?,
            y: sequence(count).map_err(err)?,
            z: sequence(count).map_err(err)?,
            vx: sequence(count).map_err(err)?,
            vy: sequence(count).map_err(err)?,
            vz: sequence(count).map_err(err)?,
        })
    }

    /// Number of particles. Fixed at creation; there is no resize.
    pub fn len(&self) -> usize {
        self.assert_coherent();
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Current position of particle `i`. Panics if `i` is out of range.
    pub fn position(&self, i: usize) -> Point3<f32> {
        Point3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Current velocity of particle `i`. Panics if `i` is out of range.
    pub fn velocity(&self, i: usize) -> Vector3<f32> {
        Vector3::new(self.vx[i], self.vy[i], self.vz[i])
    }

    pub fn set_position(&mut self, i: usize, p: Point3<f32>) {
        self.x[i] = p.x;
        self.y[i] = p.y;
        self.z[i] = p.z;
    }

    pub fn set_velocity(&mut self, i: usize, v: Vector3<f32>) {
        self.vx[i] = v.x;
        self.vy[i] = v.y;
        self.vz[i] = v.z;
    }

    /// The three position sequences, for batch reads by the force pass.
    pub fn positions(&self) -> (&[f32], &[f32], &[f32]) {
        (&self.x, &self.y, &self.z)
    }

    pub(crate) fn axes_mut(&mut self) -> AxesMut<'_> {
        self.assert_coherent();
        AxesMut {
            x: &mut self.x,
            y: &mut self.y,
            z: &mut self.z,
            vx: &mut self.vx,
            vy: &mut self.vy,
            vz: &mut self.vz,
        }
    }

    // The six sequences are allocated together and never resized; a length
    // mismatch is a bug in this crate, not a runtime condition.
    fn assert_coherent(&self) {
        debug_assert!(
            self.y.len() == self.x.len()
                && self.z.len() == self.x.len()
                && self.vx.len() == self.x.len()
                && self.vy.len() == self.x.len()
                && self.vz.len() == self.x.len()
        );
    }
}
