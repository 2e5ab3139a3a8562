//! Robot-facing API for the Rumble arena.
//!
//! A robot is a set of handlers registered with the host arena: a one-time
//! [`Robot::start`], a per-tick [`Robot::tick`], and the asynchronous
//! [`Robot::on_scanned`] and [`Robot::on_robot_death`] event handlers. All of
//! them receive an [`Arena`], the robot's view of the host runtime, through
//! which they query their own headings and queue fire-and-forget commands.
//!
//! Commands issued during a tick (from the tick body or from event handlers
//! invoked before the next tick) are resolved together at the next tick
//! boundary. Returning from `tick` is the yield: the arena then resolves
//! physics and may deliver zero or more events, in an order of its choosing,
//! before calling `tick` again. Handlers always run to completion on a single
//! thread and are never preempted by one another.
#![warn(missing_docs)]

pub mod math;

use serde::{Deserialize, Serialize};

/// A radar contact, delivered once per detected robot per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanEvent {
    /// Name of the detected robot.
    pub identity: String,
    /// Distance to the contact.
    pub range: f64,
    /// Angle to the contact in degrees, relative to the scanning robot's
    /// chassis heading, normalized to (-180, 180].
    pub bearing: f64,
}

/// Notification that a robot was destroyed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeathEvent {
    /// Name of the destroyed robot.
    pub identity: String,
}

/// A fire-and-forget request queued with the arena.
///
/// Commands take effect at the next tick resolution. Within one tick, a later
/// command of the same kind overrides an earlier one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Rotate the radar clockwise by the given degrees.
    TurnRadarRight(f64),
    /// Rotate the chassis clockwise by the given degrees.
    TurnRight(f64),
    /// Move forward by the given distance.
    Ahead(f64),
    /// Rotate the gun mount clockwise by the given degrees.
    TurnGunRight(f64),
    /// Fire with the given power.
    Fire(f64),
    /// Keep the radar heading fixed while the gun turns.
    AdjustRadarForGunTurn(bool),
    /// Keep the gun heading fixed while the chassis turns.
    AdjustGunForRobotTurn(bool),
}

/// A robot's view of the host arena.
///
/// Queries reflect the state as of the last tick resolution. Command methods
/// queue a [`Command`] and never fail; the arena does not report whether a
/// command had any effect.
pub trait Arena {
    /// Returns the chassis heading in degrees, normalized to [0, 360).
    fn heading(&self) -> f64;

    /// Returns the gun heading in degrees, normalized to [0, 360).
    fn gun_heading(&self) -> f64;

    /// Queues a clockwise radar rotation.
    fn turn_radar_right(&mut self, degrees: f64);

    /// Queues a clockwise chassis rotation.
    fn turn_right(&mut self, degrees: f64);

    /// Queues a forward advance.
    fn ahead(&mut self, distance: f64);

    /// Queues a clockwise gun rotation.
    fn turn_gun_right(&mut self, degrees: f64);

    /// Queues a shot. The arena clamps power to its permitted range.
    fn fire(&mut self, power: f64);

    /// Decouples the radar from gun turns.
    fn set_adjust_radar_for_gun_turn(&mut self, enabled: bool);

    /// Decouples the gun from chassis turns.
    fn set_adjust_gun_for_robot_turn(&mut self, enabled: bool);
}

/// The handler slots the arena dispatches to.
pub trait Robot {
    /// One-time setup, invoked before the first tick.
    fn start(&mut self, arena: &mut dyn Arena) {
        let _ = arena;
    }

    /// The per-tick body. Returning yields to the arena for tick resolution.
    fn tick(&mut self, arena: &mut dyn Arena);

    /// Invoked once per robot detected by this robot's radar during the
    /// preceding resolution.
    fn on_scanned(&mut self, arena: &mut dyn Arena, event: &ScanEvent) {
        let _ = (arena, event);
    }

    /// Invoked once per robot destroyed anywhere in the arena.
    fn on_robot_death(&mut self, arena: &mut dyn Arena, event: &DeathEvent) {
        let _ = (arena, event);
    }
}
