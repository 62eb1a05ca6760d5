// controller.rs - Start/stop/reset lifecycle around one shared board

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;

use crate::clock::{SimulationClock, Ticker};
use crate::config::LifeConfig;
use crate::error::{ConfigError, LifeError};
use crate::grid::{Grid, Snapshot};
use crate::interaction;
use crate::patterns::{self, Pattern};
use crate::rules;

const HISTORY_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// Receives a fresh snapshot after every mutation (toggle, tick, step, reset).
///
/// Called while the board lock is held, so notifications arrive in mutation
/// order. Implementations must return quickly and must not call back into the
/// `Controller`.
pub trait StateListener: Send + Sync + 'static {
    fn state_changed(&self, snapshot: &Snapshot);
}

impl<F> StateListener for F
where
    F: Fn(&Snapshot) + Send + Sync + 'static,
{
    fn state_changed(&self, snapshot: &Snapshot) {
        (self)(snapshot)
    }
}

/// Hashes of the most recent generations, for spotting repeats.
struct CycleHistory {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleHistory {
    fn new() -> Self {
        Self { hashes: [0; HISTORY_LEN], count: 0 }
    }

    /// Records `hash`; true when it matches one of the last `HISTORY_LEN` entries.
    fn repeats(&mut self, hash: u64) -> bool {
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    fn clear(&mut self) {
        self.count = 0;
    }
}

struct World {
    grid: Grid,
    generation: u64,
    epoch: u64,
    running: bool,
    history: CycleHistory,
    last_error: Option<LifeError>,
}

impl World {
    /// Applies one synchronous generation. Returns whether it repeats a recent one.
    fn advance(&mut self) -> Result<bool, LifeError> {
        let next = rules::step(&self.grid)?;
        self.grid.replace_all(next)?;
        self.generation += 1;
        Ok(self.history.repeats(self.grid.hash_cells()))
    }

    /// Any run that captured the previous epoch is now stale.
    fn halt(&mut self) {
        self.running = false;
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn fail(&mut self, err: LifeError) {
        log::error!("{err}; stopping at generation {}", self.generation);
        self.halt();
        self.last_error = Some(err);
    }

    fn restart_from(&mut self, generation: u64) {
        self.generation = generation;
        self.history.clear();
    }
}

/// The mutual-exclusion domain for all board mutation, and the clock's ticker.
struct Engine {
    world: Mutex<World>,
    listener: Box<dyn StateListener>,
    stop_on_cycle: bool,
}

impl Engine {
    fn lock(&self) -> MutexGuard<'_, World> {
        // Every mutation is a single assignment, so a poisoned board is still whole
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, world: &World) {
        self.listener.state_changed(&Snapshot::of(&world.grid, world.generation));
    }

    /// Stops the run on `err` and still notifies the listener, so a front end
    /// waiting on notifications picks up the error from `take_error`.
    fn abort_run(&self, world: &mut World, err: LifeError) {
        world.fail(err);
        self.publish(world);
    }
}

impl Ticker for Engine {
    fn arm(&self) -> u64 {
        let mut world = self.lock();
        world.epoch = world.epoch.wrapping_add(1);
        world.running = true;
        world.epoch
    }

    fn disarm(&self) {
        self.lock().halt();
    }

    fn tick(&self, epoch: u64) -> ControlFlow<()> {
        let mut world = self.lock();
        if !world.running || world.epoch != epoch {
            return ControlFlow::Break(());
        }

        match world.advance() {
            Ok(repeated) => {
                log::debug!("generation {} population {}", world.generation, world.grid.population());
                self.publish(&world);
                if repeated && self.stop_on_cycle {
                    log::info!("generation {} repeats a recent state, stopping", world.generation);
                    world.halt();
                    return ControlFlow::Break(());
                }
                ControlFlow::Continue(())
            }
            Err(err) => {
                self.abort_run(&mut world, err);
                ControlFlow::Break(())
            }
        }
    }
}

/// Owns the board and the clock. All outside access goes through here.
pub struct Controller {
    engine: Arc<Engine>,
    clock: SimulationClock,
    config: LifeConfig,
}

impl Controller {
    /// Allocates an all-dead board and sends it to `listener` for the first draw.
    ///
    /// Ticks run as tasks on `runtime`.
    pub fn init_game(
        config: LifeConfig,
        runtime: Handle,
        listener: impl StateListener,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let engine = Arc::new(Engine {
            world: Mutex::new(World {
                grid: Grid::new(config.grid_width, config.grid_height)?,
                generation: 0,
                epoch: 0,
                running: false,
                history: CycleHistory::new(),
                last_error: None,
            }),
            listener: Box::new(listener),
            stop_on_cycle: config.stop_on_cycle,
        });
        let clock = SimulationClock::new(
            config.update_interval(),
            runtime,
            Arc::clone(&engine) as Arc<dyn Ticker>,
        );

        log::info!(
            "board {}x{} ready, one generation every {} ms",
            config.grid_width,
            config.grid_height,
            config.update_interval_millis
        );
        engine.publish(&engine.lock());

        Ok(Self { engine, clock, config })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn state(&self) -> RunState {
        if self.engine.lock().running {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    /// Stopped/Running -> Running. When already running the interval restarts.
    pub fn start_game(&mut self) {
        if self.state() == RunState::Running {
            log::info!("restarting simulation clock");
        } else {
            log::info!("simulation started");
        }
        self.clock.start();
    }

    /// Running -> Stopped, keeping the cells as they are.
    pub fn stop_game(&mut self) {
        self.clock.stop();
        log::info!("simulation paused at generation {}", self.generation());
    }

    /// Any state -> Stopped with every cell dead. No tick applies after this returns.
    pub fn reset_game(&mut self) {
        self.clock.stop();

        let mut world = self.engine.lock();
        world.grid.clear();
        world.restart_from(0);
        world.last_error = None;
        self.engine.publish(&world);
        log::info!("board reset");
    }

    /// Applies exactly one generation, whatever the run state.
    pub fn step_game(&self) -> Result<(), LifeError> {
        let mut world = self.engine.lock();
        match world.advance() {
            Ok(_) => {
                self.engine.publish(&world);
                Ok(())
            }
            Err(err) => {
                world.fail(err.clone());
                Err(err)
            }
        }
    }

    /// Inbound pick from the rendering side: toggles `(x, y)` and returns its new state.
    ///
    /// Coordinates outside the board are a caller bug: the simulation stops and
    /// the error is returned.
    pub fn on_cell_picked(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        let mut world = self.engine.lock();
        match interaction::toggle(&mut world.grid, x, y) {
            Ok(alive) => {
                world.history.clear();
                self.engine.publish(&world);
                Ok(alive)
            }
            Err(err) => {
                world.fail(err.clone());
                Err(err)
            }
        }
    }

    /// Replaces the board with `pattern` centred. The run state is unchanged.
    pub fn load_pattern(&self, pattern: &Pattern) {
        let mut world = self.engine.lock();
        patterns::apply_pattern(&mut world.grid, pattern);
        world.restart_from(0);
        self.engine.publish(&world);
        log::info!("loaded pattern {}", pattern.name);
    }

    /// Seeded fill of roughly a third of the board. The run state is unchanged.
    pub fn randomize(&self, seed: u64) {
        let mut world = self.engine.lock();
        world.grid.randomize(seed);
        world.restart_from(0);
        self.engine.publish(&world);
        log::info!("randomized board with seed {seed}, population {}", world.grid.population());
    }

    /// Read-only copy for drawing; never aliases the live board.
    pub fn snapshot(&self) -> Snapshot {
        let world = self.engine.lock();
        Snapshot::of(&world.grid, world.generation)
    }

    pub fn generation(&self) -> u64 {
        self.engine.lock().generation
    }

    /// The invariant failure that last stopped the simulation, if any.
    pub fn take_error(&self) -> Option<LifeError> {
        self.engine.lock().last_error.take()
    }
}
