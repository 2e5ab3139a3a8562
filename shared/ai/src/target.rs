/// The single opponent currently being engaged, or the absence of one.
///
/// Owned by the control loop and mutated only from its event handlers: the
/// scan handler sets it, the death handler clears it. While the record is
/// empty the identity, range, and bearing are meaningless; callers must check
/// [`is_empty`](TrackedTarget::is_empty) before reading them. Range and
/// bearing are only ever written together, as one snapshot from a single
/// scan.
#[derive(Clone, Debug, Default)]
pub struct TrackedTarget {
    identity: String,
    range: f64,
    bearing: f64,
    tracked: bool,
}

impl TrackedTarget {
    pub fn new() -> TrackedTarget {
        TrackedTarget::default()
    }

    /// Forgets the current target.
    pub fn reset(&mut self) {
        self.tracked = false;
    }

    /// Returns true if no target is being tracked.
    pub fn is_empty(&self) -> bool {
        !self.tracked
    }

    /// Records a fresh observation, overwriting all fields.
    pub fn update(&mut self, identity: &str, range: f64, bearing: f64) {
        self.identity = identity.to_owned();
        self.range = range;
        self.bearing = bearing;
        self.tracked = true;
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }
}
