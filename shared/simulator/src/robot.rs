//! Per-robot arena state and command resolution.

use nalgebra::{vector, Point2};
use rumble_api::math::normalize_absolute;
use rumble_api::Command;

/// Arena-side state of one robot. Headings are absolute degrees, 0 = north,
/// positive = clockwise.
#[derive(Clone, Debug)]
pub struct RobotState {
    pub name: String,
    pub position: Point2<f64>,
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    pub adjust_radar_for_gun_turn: bool,
    pub adjust_gun_for_robot_turn: bool,
    pub alive: bool,
    /// Commands queued since the last resolution.
    pub(crate) pending: Vec<Command>,
    /// Arc the radar covered during the last resolution: start heading and
    /// signed extent.
    pub(crate) swept: Option<(f64, f64)>,
}

impl RobotState {
    pub(crate) fn new(name: &str, position: Point2<f64>, heading: f64) -> RobotState {
        let heading = normalize_absolute(heading);
        RobotState {
            name: name.to_owned(),
            position,
            heading,
            gun_heading: heading,
            radar_heading: heading,
            adjust_radar_for_gun_turn: false,
            adjust_gun_for_robot_turn: false,
            alive: true,
            pending: Vec::new(),
            swept: None,
        }
    }

    /// Applies the queued commands. Within one tick a later command of the
    /// same kind overrides an earlier one. The gun mount slews with the
    /// chassis and the radar with the gun unless the adjust flags decouple
    /// them. Returns the commanded fire power, if any.
    pub(crate) fn resolve(&mut self) -> Option<f64> {
        let mut body_turn = 0.0;
        let mut gun_turn = 0.0;
        let mut radar_turn = 0.0;
        let mut advance = 0.0;
        let mut fire = None;
        for command in self.pending.drain(..) {
            match command {
                Command::TurnRight(degrees) => body_turn = degrees,
                Command::TurnGunRight(degrees) => gun_turn = degrees,
                Command::TurnRadarRight(degrees) => radar_turn = degrees,
                Command::Ahead(distance) => advance = distance,
                Command::Fire(power) => fire = Some(power),
                Command::AdjustRadarForGunTurn(on) => self.adjust_radar_for_gun_turn = on,
                Command::AdjustGunForRobotTurn(on) => self.adjust_gun_for_robot_turn = on,
            }
        }

        let gun_delta = gun_turn
            + if self.adjust_gun_for_robot_turn {
                0.0
            } else {
                body_turn
            };
        let radar_delta = radar_turn
            + if self.adjust_radar_for_gun_turn {
                0.0
            } else {
                gun_delta
            };

        self.heading = normalize_absolute(self.heading + body_turn);
        self.gun_heading = normalize_absolute(self.gun_heading + gun_delta);
        let sweep_start = self.radar_heading;
        self.radar_heading = normalize_absolute(self.radar_heading + radar_delta);
        self.swept = Some((sweep_start, radar_delta.clamp(-360.0, 360.0)));

        let rad = self.heading.to_radians();
        self.position += vector![rad.sin(), rad.cos()] * advance;

        fire
    }
}
