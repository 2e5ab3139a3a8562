//! A minimal deterministic arena for Rumble robots.
//!
//! The arena drives registered robots through the cooperative per-tick cycle
//! of [`rumble_api`]: tick bodies run first, queued commands resolve once,
//! radar detections and death notifications are dispatched before the next
//! tick. There is no ballistics, damage, or wall model; destruction is
//! injected by the caller.

pub mod radar;
pub mod robot;
pub mod simulation;
