//! Tick loop runner.
//!
//! [`build`] assembles a [`Simulation`] from config: the one-room seed map,
//! the observer registry with a chronicle observer parked at the origin, and
//! a seeded mob factory with its initial population. [`run_ticks`] then
//! drives it on a fixed interval until the tick limit is reached or the
//! shutdown future resolves.
//!
//! Every tick first asks the population policy whether to spawn, then lets
//! one random mob act. A tick with no mobs at all is counted as idle.

use std::future::Future;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use warren_mobs::{BehaviorContext, MobError, MobFactory, Outcome};
use warren_types::Coord;
use warren_world::{CellMap, Presence, WorldError, WorldGrid, create_starting_world};

use crate::config::SimulationConfig;

/// Errors that can occur while building or running the simulation.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The starting world could not be built.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// A spawn or mob action failed.
    #[error("mob error: {source}")]
    Mob {
        /// The underlying mob error.
        #[from]
        source: MobError,
    },
}

/// Why the tick loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// `world.max_ticks` ticks have run.
    MaxTicksReached,
    /// The shutdown signal fired.
    Shutdown,
}

/// Totals for one run of [`run_ticks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed.
    pub ticks: u64,
    /// Rooms on the grid at the end.
    pub rooms: usize,
    /// Mobs alive at the end.
    pub mobs: usize,
    /// Successful moves.
    pub moves: u64,
    /// Cells dug.
    pub creations: u64,
    /// Actions that did nothing.
    pub blocked: u64,
    /// Ticks skipped because no mob existed yet.
    pub idle: u64,
    /// Why the loop stopped.
    pub end_reason: EndReason,
}

/// Everything one tick touches.
pub struct Simulation<R> {
    /// The room grid.
    pub world: CellMap,
    /// Observers that receive room broadcasts.
    pub presence: Presence,
    /// The mob population.
    pub mobs: MobFactory<R>,
}

impl<R: Rng> Simulation<R> {
    /// Spawn one mob.
    fn spawn(&mut self) -> Result<(), MobError> {
        let mut ctx = BehaviorContext::new(&mut self.world, &mut self.presence);
        self.mobs.spawn(&mut ctx)?;
        Ok(())
    }
}

/// Build the seed world and its initial population.
///
/// Returns the simulation together with the chronicle observer's inbox;
/// pass it to [`spawn_chronicle`] to have origin broadcasts logged.
///
/// # Errors
///
/// Returns [`RunnerError`] if the world cannot be seeded or a spawn fails.
pub fn build(
    config: &SimulationConfig,
) -> Result<(Simulation<SmallRng>, UnboundedReceiver<String>), RunnerError> {
    let world = create_starting_world(&config.world.origin_description)?;
    let mut presence = Presence::new();
    let (chronicle_id, inbox) = presence.join(Coord::ORIGIN);
    info!(observer = %chronicle_id, at = %Coord::ORIGIN, "Chronicle attached");

    let rng = SmallRng::seed_from_u64(config.world.seed);
    let mobs = MobFactory::from_config(&config.mobs, rng)?;

    let mut sim = Simulation {
        world,
        presence,
        mobs,
    };
    for _ in 0..config.mobs.initial_count {
        sim.spawn()?;
    }
    info!(
        rooms = sim.world.room_count(),
        mobs = sim.mobs.number_of_mobs(),
        "Starting world created"
    );
    Ok((sim, inbox))
}

/// Log every line the chronicle observer hears until its sender is dropped.
///
/// The sender lives in the simulation's [`Presence`], so the task ends once
/// the simulation is dropped.
pub fn spawn_chronicle(mut inbox: UnboundedReceiver<String>) -> JoinHandle<u64> {
    tokio::spawn(async move {
        let mut heard: u64 = 0;
        while let Some(line) = inbox.recv().await {
            heard = heard.saturating_add(1);
            info!(target: "warren::chronicle", line = line.trim_end(), "Heard at origin");
        }
        heard
    })
}

/// Run ticks until `world.max_ticks` is reached or `shutdown` resolves.
///
/// A `max_ticks` of zero runs until shutdown.
///
/// # Errors
///
/// Returns [`RunnerError::Mob`] if a spawn or action fails. Blocked actions
/// are counted, not treated as errors.
pub async fn run_ticks<R, F>(
    sim: &mut Simulation<R>,
    config: &SimulationConfig,
    shutdown: F,
) -> Result<RunSummary, RunnerError>
where
    R: Rng,
    F: Future<Output = ()>,
{
    let max_ticks = config.world.max_ticks;
    let mut interval =
        tokio::time::interval(Duration::from_millis(config.world.tick_interval_ms.max(1)));
    tokio::pin!(shutdown);

    let mut ticks: u64 = 0;
    let mut moves: u64 = 0;
    let mut creations: u64 = 0;
    let mut blocked: u64 = 0;
    let mut idle: u64 = 0;

    info!(
        max_ticks = max_ticks,
        tick_interval_ms = config.world.tick_interval_ms,
        mobs = sim.mobs.number_of_mobs(),
        "Simulation starting"
    );

    let end_reason = loop {
        if max_ticks > 0 && ticks >= max_ticks {
            info!(tick = ticks, max_ticks = max_ticks, "Tick limit reached");
            break EndReason::MaxTicksReached;
        }

        tokio::select! {
            biased;
            () = &mut shutdown => {
                info!(tick = ticks, "Shutdown requested");
                break EndReason::Shutdown;
            }
            _ = interval.tick() => {}
        }

        let tick = ticks.saturating_add(1);
        if config.mobs.wants_spawn(tick, sim.mobs.number_of_mobs()) {
            sim.spawn()?;
        }

        if sim.mobs.number_of_mobs() == 0 {
            idle = idle.saturating_add(1);
            ticks = tick;
            continue;
        }

        let mut ctx = BehaviorContext::new(&mut sim.world, &mut sim.presence);
        let report = match sim.mobs.random_action(&mut ctx) {
            Ok(report) => report,
            Err(e) => {
                warn!(tick = tick, error = %e, "Tick failed");
                return Err(e.into());
            }
        };
        match report.outcome {
            Outcome::Moved { .. } => moves = moves.saturating_add(1),
            Outcome::Created { .. } => creations = creations.saturating_add(1),
            Outcome::Blocked { .. } => blocked = blocked.saturating_add(1),
        }
        ticks = tick;
    };

    Ok(RunSummary {
        ticks,
        rooms: sim.world.room_count(),
        mobs: sim.mobs.number_of_mobs(),
        moves,
        creations,
        blocked,
        idle,
        end_reason,
    })
}

/// Collect the roster of every occupied room, as `show_names_at` renders it.
pub fn census<R: Rng>(sim: &Simulation<R>) -> Vec<(Coord, Vec<String>)> {
    sim.mobs
        .occupied_rooms()
        .into_iter()
        .map(|at| {
            let mut lines: Vec<String> = Vec::new();
            sim.mobs.show_names_at(&mut lines, at, "");
            (at, lines)
        })
        .collect()
}

/// Log the end of a run and the final census.
pub fn log_simulation_end<R: Rng>(summary: &RunSummary, sim: &Simulation<R>) {
    info!(
        reason = ?summary.end_reason,
        ticks = summary.ticks,
        rooms = summary.rooms,
        mobs = summary.mobs,
        moves = summary.moves,
        creations = summary.creations,
        blocked = summary.blocked,
        idle = summary.idle,
        "Simulation ended"
    );

    for (at, lines) in census(sim) {
        let description = sim
            .world
            .find_at(at)
            .map_or("<missing>", |room| room.description.as_str());
        let names: Vec<&str> = lines.iter().map(String::as_str).map(str::trim).collect();
        info!(at = %at, room = description, mobs = ?names, "Census");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fast_config(max_ticks: u64) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.world.tick_interval_ms = 1;
        config.world.max_ticks = max_ticks;
        config
    }

    #[tokio::test]
    async fn build_spawns_initial_population_at_origin() {
        let mut config = fast_config(0);
        config.mobs.initial_count = 3;
        let (sim, mut inbox) = build(&config).unwrap();

        assert_eq!(sim.world.room_count(), 1);
        assert_eq!(sim.mobs.number_of_mobs(), 3);
        for (_, mob) in sim.mobs.mobs() {
            assert_eq!(mob.position(), Coord::ORIGIN);
        }

        let mut heard = Vec::new();
        while let Ok(line) = inbox.try_recv() {
            heard.push(line);
        }
        assert_eq!(heard.len(), 3);
        assert!(heard.iter().all(|l| l.ends_with(" enters the world\n")));
    }

    #[tokio::test]
    async fn stops_at_tick_limit() {
        let config = fast_config(40);
        let (mut sim, _inbox) = build(&config).unwrap();

        let summary = run_ticks(&mut sim, &config, std::future::pending())
            .await
            .unwrap();

        assert_eq!(summary.end_reason, EndReason::MaxTicksReached);
        assert_eq!(summary.ticks, 40);
        assert_eq!(
            summary
                .moves
                .saturating_add(summary.creations)
                .saturating_add(summary.blocked),
            40
        );
        assert_eq!(
            u64::try_from(summary.rooms).unwrap(),
            summary.creations.saturating_add(1)
        );
        assert!(sim.world.unreciprocated_exits().is_empty());
    }

    #[tokio::test]
    async fn shutdown_wins_before_first_tick() {
        let config = fast_config(0);
        let (mut sim, _inbox) = build(&config).unwrap();

        let summary = run_ticks(&mut sim, &config, async {}).await.unwrap();

        assert_eq!(summary.end_reason, EndReason::Shutdown);
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.rooms, 1);
    }

    #[tokio::test]
    async fn periodic_spawning_respects_cap() {
        let mut config = fast_config(60);
        config.mobs.spawn_every_ticks = 10;
        config.mobs.max_population = 3;
        let (mut sim, _inbox) = build(&config).unwrap();

        let summary = run_ticks(&mut sim, &config, std::future::pending())
            .await
            .unwrap();

        assert_eq!(summary.mobs, 3);
    }

    #[tokio::test]
    async fn census_lists_every_mob_once() {
        let mut config = fast_config(200);
        config.mobs.initial_count = 4;
        config.mobs.spawn_every_ticks = 0;
        let (mut sim, _inbox) = build(&config).unwrap();
        run_ticks(&mut sim, &config, std::future::pending())
            .await
            .unwrap();

        let roster = census(&sim);
        let listed: usize = roster.iter().map(|(_, lines)| lines.len()).sum();
        assert_eq!(listed, 4);
        assert_eq!(listed, sim.mobs.number_of_mobs());
        for (at, lines) in &roster {
            assert!(sim.world.contains(*at));
            assert!(lines.iter().all(|l| l.starts_with("  ") && l.ends_with('\n')));
        }
    }

    #[tokio::test]
    async fn empty_population_idles_until_first_spawn() {
        let mut config = fast_config(300);
        config.mobs.initial_count = 0;
        config.mobs.spawn_every_ticks = 100;
        assert!(config.mobs.validate().is_ok());
        let (mut sim, _inbox) = build(&config).unwrap();
        assert_eq!(sim.mobs.number_of_mobs(), 0);

        let summary = run_ticks(&mut sim, &config, std::future::pending())
            .await
            .unwrap();

        assert_eq!(summary.end_reason, EndReason::MaxTicksReached);
        assert_eq!(summary.ticks, 300);
        assert_eq!(summary.idle, 99);
        assert_eq!(summary.mobs, 3);
        assert_eq!(
            summary
                .moves
                .saturating_add(summary.creations)
                .saturating_add(summary.blocked),
            201
        );
    }

    #[tokio::test]
    async fn chronicle_counts_origin_lines_and_ends_with_simulation() {
        let config = fast_config(0);
        let (sim, inbox) = build(&config).unwrap();
        let chronicle = spawn_chronicle(inbox);
        drop(sim);
        assert_eq!(chronicle.await.unwrap(), 1);
    }
}
