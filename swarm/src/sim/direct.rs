use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::{
    sim::AccelScratch,
    store::{AxesMut, ParticleStore},
};

// a_i contribution from particle j: (r_j - r_i) * g / (|r|^2 |r| + eps)
#[inline]
fn pair_accel(g: f32, eps: f32, rx: f32, ry: f32, rz: f32) -> (f32, f32, f32) {
    let mag_sq = rx * rx + ry * ry + rz * rz;
    let w = g / (mag_sq * mag_sq.sqrt() + eps);
    (rx * w, ry * w, rz * w)
}

/// Kick-drift pass over every particle, in parallel across the pool.
///
/// Each axis is an independent (velocity, position, acceleration) lane
/// triple, so the three axes are swept one after the other.
pub(crate) fn par_kick_drift(axes: AxesMut<'_>, acc: &mut AccelScratch, tau: f32) {
    let lanes = [
        (axes.vx, axes.x, acc.ax.as_mut_slice()),
        (axes.vy, axes.y, acc.ay.as_mut_slice()),
        (axes.vz, axes.z, acc.az.as_mut_slice()),
    ];
    for (vel, pos, acc) in lanes {
        vel.par_iter_mut()
            .zip(pos.par_iter_mut())
            .zip(acc.par_iter_mut())
            .for_each(|((vel, pos), acc)| {
                // Integrate the acceleration into the velocity, then the
                // just-updated velocity into the position.
                *vel += *acc * tau;
                *pos += *vel * tau;
                // The accumulator is reused next step, so reset it here.
                *acc = 0.0;
            });
    }
}

pub(crate) fn iter(store: &ParticleStore, acc: &mut AccelScratch, g: f32, eps: f32) {
    let (x, y, z) = store.positions();
    acc.ax
        .par_iter_mut()
        .zip(acc.ay.par_iter_mut())
        .zip(acc.az.par_iter_mut())
        .enumerate()
        .for_each(|(i, ((ax, ay), az))| {
            // Fixed j-ascending summation per particle, so the result does
            // not depend on how particles are split across threads.
            for j in 0..x.len() {
                if j == i {
                    continue;
                }
                let (dx, dy, dz) = pair_accel(g, eps, x[j] - x[i], y[j] - y[i], z[j] - z[i]);
                *ax += dx;
                *ay += dy;
                *az += dz;
            }
        });
}

pub(crate) fn iter_single_threaded(store: &ParticleStore, acc: &mut AccelScratch, g: f32, eps: f32) {
    let (x, y, z) = store.positions();
    for i in 0..x.len() {
        for j in 0..x.len() {
            if j == i {
                continue;
            }
            let (dx, dy, dz) = pair_accel(g, eps, x[j] - x[i], y[j] - y[i], z[j] - z[i]);
            acc.ax[i] += dx;
            acc.ay[i] += dy;
            acc.az[i] += dz;
        }
    }
}
