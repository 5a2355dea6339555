//! Headless batch run of the gravity simulation
//!
//! Seeds a reproducible population, drives `tick` and `render` against a
//! recording surface for a fixed number of frames and logs the outcome.
//! Tune with `GRAVITY_SIM_BODIES`, `GRAVITY_SIM_FRAMES` and
//! `GRAVITY_SIM_SEED`; set `RUST_LOG=info` to see the report.

use std::time::Instant;

use gravity_sim::fps::FrameStats;
use gravity_sim::seed;
use gravity_sim::settings::HostSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use universe::{RecordingSurface, Universe, UniverseError};

const CANVAS_HEIGHT: f64 = 720.0;
const DEFAULT_SEED: u64 = 0x5eed;
const REPORT_EVERY: u64 = 60;

fn run(settings: &HostSettings) -> Result<(), UniverseError> {
    let mut rng = StdRng::seed_from_u64(settings.seed.unwrap_or(DEFAULT_SEED));
    let mut universe = Universe::new();
    let bodies = seed::populate(&mut universe, &mut rng, settings.body_count, CANVAS_HEIGHT)?;

    let mut surface = RecordingSurface::new(CANVAS_HEIGHT);
    let mut stats = FrameStats::new();

    for frame in 1..=settings.frames {
        let start = Instant::now();

        universe.tick();
        surface.clear();
        universe.render(&mut surface);

        stats.record(start.elapsed());

        if frame % REPORT_EVERY == 0 {
            log::debug!(
                "frame {frame}: {} circles drawn, center of mass {:?}",
                surface.arc_count(),
                universe.center_of_mass()
            );
        }
    }

    log::info!(
        "simulated {} ticks ({} time units) for {} bodies",
        universe.ticks(),
        universe.elapsed(),
        universe.len()
    );
    log::info!("{}", stats.summary());

    for info in &bodies {
        let p = universe.get_position(&info.id)?;
        log::info!(
            "{} mass {:.0} {} -> ({:.2}, {:.2}, {:.2})",
            info.id,
            info.mass,
            info.color,
            p.x,
            p.y,
            p.z
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let settings = HostSettings::from_env();
    log::info!("starting headless run with {:?}", settings);

    if let Err(e) = run(&settings) {
        log::error!("headless run failed: {e}");
        std::process::exit(1);
    }
}
