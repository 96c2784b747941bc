use std::time::Instant;

use log::info;
use swarm::{
    AccelModel, CloudParams, DirectGravity, FreeDrift, ParticleStore, Swarm,
    constants::{DIRECT_GRAVITY_CUTOFF, N_PARTICLES, TAU},
    seed_cloud,
};

/// Simulated frames to run before exiting.
const RUN_TICKS: u64 = 10_000;
/// Progress report interval, in ticks.
const LOG_INTERVAL: u64 = 500;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut store = ParticleStore::create(N_PARTICLES)?;
    seed_cloud(&mut store, &CloudParams::default(), &mut rand::rng());

    // All-pairs attraction is only affordable for modest populations; past
    // the cutoff the cloud drifts freely.
    if N_PARTICLES <= DIRECT_GRAVITY_CUTOFF {
        run_loop(Swarm::new(store, DirectGravity::default()));
    } else {
        run_loop(Swarm::new(store, FreeDrift));
    }

    Ok(())
}

// Stand-in for the frame driver of a rendering host: one advance per frame,
// then a position read-back keyed by particle index.
fn run_loop<M: AccelModel + Send>(mut swarm: Swarm<M>) {
    let mut last = Instant::now();

    for tick in 1..=RUN_TICKS {
        swarm.advance(TAU);

        if tick % LOG_INTERVAL == 0 {
            let rate = LOG_INTERVAL as f64 / last.elapsed().as_secs_f64();
            let p = swarm.position(0);
            info!(
                "tick {tick}: particle 0 at ({:.1}, {:.1}, {:.1}), {rate:.0} steps/s",
                p.x, p.y, p.z
            );
            last = Instant::now();
        }
    }
    info!("{RUN_TICKS} ticks completed");
}
