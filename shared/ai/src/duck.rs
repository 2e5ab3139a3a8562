use rumble_api::{Arena, Robot};

/// A robot that never moves, scans, or shoots. Useful as a practice target.
#[derive(Default)]
pub struct SittingDuck;

impl SittingDuck {
    pub fn new() -> SittingDuck {
        SittingDuck
    }
}

impl Robot for SittingDuck {
    fn tick(&mut self, _arena: &mut dyn Arena) {}
}
