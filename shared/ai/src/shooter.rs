use crate::TrackedTarget;
use rumble_api::{Arena, DeathEvent, Robot, ScanEvent};

/// A different contact must be this much closer than the tracked target's
/// last known range to displace it.
const TRACK_SWITCH_MARGIN: f64 = 70.0;

const FULL_SWEEP: f64 = 360.0;
const PATROL_TURN: f64 = 5.0;
const PATROL_ADVANCE: f64 = 20.0;

const FIRE_POWER_NUMERATOR: f64 = 400.0;
const MAX_FIRE_POWER: f64 = 3.0;
/// Guards the power division against zero-range contacts. Any range at or
/// below the cap threshold fires at full power regardless.
const MIN_FIRING_RANGE: f64 = 1.0;

/// A robot that sweeps its radar every tick, sticks to one tracked target,
/// and fires at it with power inversely proportional to range.
///
/// A contact replaces the tracked target only if there is no current target,
/// the contact is more than [`TRACK_SWITCH_MARGIN`] closer, or it is a fresh
/// reading of the target itself. Everything else is ignored. The track is
/// dropped when the tracked robot dies.
pub struct Shooter {
    target: TrackedTarget,
}

impl Shooter {
    pub fn new() -> Shooter {
        Shooter {
            target: TrackedTarget::new(),
        }
    }

    fn accepts(&self, event: &ScanEvent) -> bool {
        self.target.is_empty()
            || event.range < self.target.range() - TRACK_SWITCH_MARGIN
            || event.identity == self.target.identity()
    }

    fn fire_power(range: f64) -> f64 {
        (FIRE_POWER_NUMERATOR / range.max(MIN_FIRING_RANGE)).min(MAX_FIRE_POWER)
    }
}

impl Default for Shooter {
    fn default() -> Self {
        Self::new()
    }
}

impl Robot for Shooter {
    fn start(&mut self, arena: &mut dyn Arena) {
        // Let the radar sweep and the gun aim independently of each other
        // and of the patrol motion.
        arena.set_adjust_radar_for_gun_turn(true);
        arena.set_adjust_gun_for_robot_turn(true);
        self.target.reset();
        arena.turn_radar_right(FULL_SWEEP);
    }

    fn tick(&mut self, arena: &mut dyn Arena) {
        arena.turn_radar_right(FULL_SWEEP);
        arena.turn_right(PATROL_TURN);
        arena.ahead(PATROL_ADVANCE);
    }

    fn on_scanned(&mut self, arena: &mut dyn Arena, event: &ScanEvent) {
        if !self.accepts(event) {
            return;
        }
        if self.target.is_empty() || event.identity != self.target.identity() {
            log::debug!("tracking {} at range {:.0}", event.identity, event.range);
        }
        self.target.update(&event.identity, event.range, event.bearing);
        // Correct the current gun/chassis misalignment and rotate toward the
        // bearing the contact was just seen at.
        arena.turn_gun_right(arena.heading() - arena.gun_heading() + event.bearing);
        arena.fire(Self::fire_power(event.range));
    }

    fn on_robot_death(&mut self, _arena: &mut dyn Arena, event: &DeathEvent) {
        if !self.target.is_empty() && event.identity == self.target.identity() {
            log::debug!("{} destroyed, dropping track", event.identity);
            self.target.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rumble_api::Command;
    use test_log::test;

    #[derive(Default)]
    struct RecordingArena {
        heading: f64,
        gun_heading: f64,
        commands: Vec<Command>,
    }

    impl Arena for RecordingArena {
        fn heading(&self) -> f64 {
            self.heading
        }
        fn gun_heading(&self) -> f64 {
            self.gun_heading
        }
        fn turn_radar_right(&mut self, degrees: f64) {
            self.commands.push(Command::TurnRadarRight(degrees));
        }
        fn turn_right(&mut self, degrees: f64) {
            self.commands.push(Command::TurnRight(degrees));
        }
        fn ahead(&mut self, distance: f64) {
            self.commands.push(Command::Ahead(distance));
        }
        fn turn_gun_right(&mut self, degrees: f64) {
            self.commands.push(Command::TurnGunRight(degrees));
        }
        fn fire(&mut self, power: f64) {
            self.commands.push(Command::Fire(power));
        }
        fn set_adjust_radar_for_gun_turn(&mut self, enabled: bool) {
            self.commands.push(Command::AdjustRadarForGunTurn(enabled));
        }
        fn set_adjust_gun_for_robot_turn(&mut self, enabled: bool) {
            self.commands.push(Command::AdjustGunForRobotTurn(enabled));
        }
    }

    fn scan(identity: &str, range: f64, bearing: f64) -> ScanEvent {
        ScanEvent {
            identity: identity.to_owned(),
            range,
            bearing,
        }
    }

    fn fired_power(commands: &[Command]) -> Option<f64> {
        commands.iter().find_map(|c| match c {
            Command::Fire(power) => Some(*power),
            _ => None,
        })
    }

    fn gun_turn(commands: &[Command]) -> Option<f64> {
        commands.iter().find_map(|c| match c {
            Command::TurnGunRight(degrees) => Some(*degrees),
            _ => None,
        })
    }

    #[test]
    fn startup_decouples_mounts_and_sweeps() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.start(&mut arena);
        assert_eq!(
            arena.commands,
            vec![
                Command::AdjustRadarForGunTurn(true),
                Command::AdjustGunForRobotTurn(true),
                Command::TurnRadarRight(360.0),
            ]
        );
        assert!(shooter.target.is_empty());
    }

    #[test]
    fn tick_sweeps_and_patrols() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.tick(&mut arena);
        assert_eq!(
            arena.commands,
            vec![
                Command::TurnRadarRight(360.0),
                Command::TurnRight(5.0),
                Command::Ahead(20.0),
            ]
        );
    }

    // Any contact is accepted while the track is empty.
    #[test]
    fn empty_track_accepts_any_contact() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.on_scanned(&mut arena, &scan("R2", 100.0, 30.0));
        assert!(!shooter.target.is_empty());
        assert_eq!(shooter.target.identity(), "R2");
        assert_relative_eq!(shooter.target.range(), 100.0);
        assert_relative_eq!(shooter.target.bearing(), 30.0);
        assert_relative_eq!(gun_turn(&arena.commands).unwrap(), 30.0);
        assert_relative_eq!(fired_power(&arena.commands).unwrap(), 3.0);
    }

    // A fresh reading of the tracked robot is always accepted, even if it
    // moved farther away.
    #[test]
    fn same_identity_refreshes_track() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.on_scanned(&mut arena, &scan("R2", 200.0, 0.0));
        arena.commands.clear();
        shooter.on_scanned(&mut arena, &scan("R2", 250.0, 10.0));
        assert_eq!(shooter.target.identity(), "R2");
        assert_relative_eq!(shooter.target.range(), 250.0);
        assert_relative_eq!(shooter.target.bearing(), 10.0);
        assert_relative_eq!(fired_power(&arena.commands).unwrap(), 400.0 / 250.0);
    }

    // A different contact displaces the track when it is more than the
    // margin closer.
    #[test]
    fn closer_contact_displaces_track() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.on_scanned(&mut arena, &scan("R2", 200.0, 0.0));
        shooter.on_scanned(&mut arena, &scan("Sentinel", 129.0, 5.0));
        assert_eq!(shooter.target.identity(), "Sentinel");
        assert_relative_eq!(shooter.target.range(), 129.0);
        assert_relative_eq!(shooter.target.bearing(), 5.0);
    }

    // The margin comparison is strict, and a rejected contact changes
    // nothing and issues nothing.
    #[test]
    fn contact_at_or_above_margin_is_ignored() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.on_scanned(&mut arena, &scan("R2", 200.0, 0.0));
        arena.commands.clear();

        shooter.on_scanned(&mut arena, &scan("Sentinel", 131.0, 5.0));
        assert!(arena.commands.is_empty());

        // Exactly margin closer is still rejected.
        shooter.on_scanned(&mut arena, &scan("Sentinel", 130.0, 5.0));
        assert!(arena.commands.is_empty());
        assert_eq!(shooter.target.identity(), "R2");
        assert_relative_eq!(shooter.target.range(), 200.0);
    }

    // The death of the tracked robot drops the track.
    #[test]
    fn death_of_tracked_robot_clears_track() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.on_scanned(&mut arena, &scan("R2", 200.0, 0.0));
        shooter.on_robot_death(
            &mut arena,
            &DeathEvent {
                identity: "R2".to_owned(),
            },
        );
        assert!(shooter.target.is_empty());
    }

    // Any other death is a no-op, including while empty.
    #[test]
    fn death_of_other_robot_is_ignored() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.on_robot_death(
            &mut arena,
            &DeathEvent {
                identity: "Sentinel".to_owned(),
            },
        );
        assert!(shooter.target.is_empty());

        shooter.on_scanned(&mut arena, &scan("R2", 200.0, 0.0));
        shooter.on_robot_death(
            &mut arena,
            &DeathEvent {
                identity: "Sentinel".to_owned(),
            },
        );
        assert_eq!(shooter.target.identity(), "R2");
        assert!(!shooter.target.is_empty());
    }

    // Power is min(400/range, 3), strictly decreasing past the cap.
    #[test]
    fn fire_power_decreases_with_range() {
        assert_relative_eq!(Shooter::fire_power(100.0), 3.0);
        assert_relative_eq!(Shooter::fire_power(133.0), 3.0);
        assert_relative_eq!(Shooter::fire_power(150.0), 400.0 / 150.0);
        assert_relative_eq!(Shooter::fire_power(200.0), 2.0);
        assert_relative_eq!(Shooter::fire_power(400.0), 1.0);
        assert!(Shooter::fire_power(150.0) > Shooter::fire_power(200.0));
        assert!(Shooter::fire_power(200.0) > Shooter::fire_power(400.0));
    }

    // The zero-range edge case saturates at the cap instead of dividing by
    // zero.
    #[test]
    fn zero_range_contact_fires_at_full_power() {
        let mut arena = RecordingArena::default();
        let mut shooter = Shooter::new();
        shooter.on_scanned(&mut arena, &scan("R2", 0.0, 0.0));
        assert_relative_eq!(fired_power(&arena.commands).unwrap(), 3.0);
    }

    #[test]
    fn gun_turn_corrects_mount_misalignment() {
        let mut arena = RecordingArena {
            heading: 90.0,
            gun_heading: 45.0,
            ..Default::default()
        };
        let mut shooter = Shooter::new();
        shooter.on_scanned(&mut arena, &scan("R2", 100.0, 10.0));
        assert_relative_eq!(gun_turn(&arena.commands).unwrap(), 55.0);
    }
}
