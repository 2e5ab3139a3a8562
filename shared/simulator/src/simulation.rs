//! The arena itself: robot registry, per-tick stepping, event dispatch.

use crate::radar;
use crate::robot::RobotState;
use nalgebra::Point2;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rumble_api::math::normalize_relative;
use rumble_api::{Arena, Command, DeathEvent, Robot, ScanEvent};
use serde::{Deserialize, Serialize};

pub const MIN_FIRE_POWER: f64 = 0.1;
pub const MAX_FIRE_POWER: f64 = 3.0;

/// A shot resolved during a tick. The arena has no ballistics; shots are
/// recorded so tests can observe firing decisions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FireEvent {
    pub shooter: String,
    pub power: f64,
}

/// A detection delivered during a tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub scanner: String,
    pub event: ScanEvent,
}

/// Everything observable that happened during the last [`Simulation::step`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimEvents {
    pub fired: Vec<FireEvent>,
    pub scans: Vec<ScanRecord>,
}

/// One robot's mutable view of the arena during a handler invocation.
struct ArenaView<'a> {
    state: &'a mut RobotState,
}

impl Arena for ArenaView<'_> {
    fn heading(&self) -> f64 {
        self.state.heading
    }
    fn gun_heading(&self) -> f64 {
        self.state.gun_heading
    }
    fn turn_radar_right(&mut self, degrees: f64) {
        self.state.pending.push(Command::TurnRadarRight(degrees));
    }
    fn turn_right(&mut self, degrees: f64) {
        self.state.pending.push(Command::TurnRight(degrees));
    }
    fn ahead(&mut self, distance: f64) {
        self.state.pending.push(Command::Ahead(distance));
    }
    fn turn_gun_right(&mut self, degrees: f64) {
        self.state.pending.push(Command::TurnGunRight(degrees));
    }
    fn fire(&mut self, power: f64) {
        self.state.pending.push(Command::Fire(power));
    }
    fn set_adjust_radar_for_gun_turn(&mut self, enabled: bool) {
        self.state
            .pending
            .push(Command::AdjustRadarForGunTurn(enabled));
    }
    fn set_adjust_gun_for_robot_turn(&mut self, enabled: bool) {
        self.state
            .pending
            .push(Command::AdjustGunForRobotTurn(enabled));
    }
}

pub struct Simulation {
    states: Vec<RobotState>,
    controllers: Vec<Box<dyn Robot>>,
    pending_deaths: Vec<DeathEvent>,
    events: SimEvents,
    tick: u32,
    rng: ChaCha8Rng,
}

impl Simulation {
    pub fn new(seed: u32) -> Simulation {
        log::info!("seed {seed}");
        Simulation {
            states: Vec::new(),
            controllers: Vec::new(),
            pending_deaths: Vec::new(),
            events: SimEvents::default(),
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed as u64),
        }
    }

    /// Registers a robot and runs its one-time startup handler. Commands
    /// queued during startup resolve with the first step.
    pub fn add_robot(
        &mut self,
        name: &str,
        position: Point2<f64>,
        heading: f64,
        mut controller: Box<dyn Robot>,
    ) {
        assert!(
            self.robot(name).is_none(),
            "duplicate robot name {name:?}"
        );
        let mut state = RobotState::new(name, position, heading);
        controller.start(&mut ArenaView { state: &mut state });
        self.states.push(state);
        self.controllers.push(controller);
    }

    pub fn robot(&self, name: &str) -> Option<&RobotState> {
        self.states.iter().find(|s| s.name == name)
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Events from the most recent step.
    pub fn events(&self) -> &SimEvents {
        &self.events
    }

    /// Removes a robot from play and queues its death notification for
    /// delivery during the next step.
    pub fn destroy(&mut self, name: &str) {
        if let Some(state) = self.states.iter_mut().find(|s| s.name == name) {
            if state.alive {
                state.alive = false;
                self.pending_deaths.push(DeathEvent {
                    identity: name.to_owned(),
                });
            }
        }
    }

    /// Advances the arena one tick: tick bodies, command resolution, radar
    /// detection, then death notifications. Handlers run to completion,
    /// strictly sequentially.
    pub fn step(&mut self) {
        self.events = SimEvents::default();

        // Tick bodies. Nothing resolves until every robot has yielded.
        for (state, controller) in self.states.iter_mut().zip(self.controllers.iter_mut()) {
            if state.alive {
                controller.tick(&mut ArenaView { state });
            }
        }

        // Resolution of everything queued since the last step, including
        // commands issued by last step's event handlers.
        for state in self.states.iter_mut().filter(|s| s.alive) {
            if let Some(power) = state.resolve() {
                self.events.fired.push(FireEvent {
                    shooter: state.name.clone(),
                    power: power.clamp(MIN_FIRE_POWER, MAX_FIRE_POWER),
                });
            }
        }

        // Detections from this tick's sweeps. Delivery order within a tick
        // is the arena's choice; robots must not depend on it.
        let mut detections: Vec<(usize, ScanEvent)> = Vec::new();
        for (i, scanner) in self.states.iter().enumerate() {
            if !scanner.alive {
                continue;
            }
            let Some((start, extent)) = scanner.swept else {
                continue;
            };
            for contact in self.states.iter().filter(|c| c.alive) {
                if contact.name == scanner.name {
                    continue;
                }
                let bearing = radar::absolute_bearing(scanner.position, contact.position);
                if radar::in_sweep(start, extent, bearing) {
                    detections.push((
                        i,
                        ScanEvent {
                            identity: contact.name.clone(),
                            range: radar::range(scanner.position, contact.position),
                            bearing: normalize_relative(bearing - scanner.heading),
                        },
                    ));
                }
            }
        }
        detections.shuffle(&mut self.rng);
        for (i, event) in detections {
            self.events.scans.push(ScanRecord {
                scanner: self.states[i].name.clone(),
                event: event.clone(),
            });
            self.controllers[i].on_scanned(
                &mut ArenaView {
                    state: &mut self.states[i],
                },
                &event,
            );
        }

        // Deaths injected since the last step, reported to every survivor.
        let deaths = std::mem::take(&mut self.pending_deaths);
        for death in &deaths {
            for (state, controller) in self.states.iter_mut().zip(self.controllers.iter_mut()) {
                if state.alive {
                    controller.on_robot_death(&mut ArenaView { state }, death);
                }
            }
        }

        self.tick += 1;
    }
}
