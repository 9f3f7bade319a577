//! Match logic module
//!
//! Everything here is engine-free: the session talks to the physics/render
//! boundary through `BoundaryCmd` values and hears back through judged
//! collision verdicts, so the whole match loop runs under plain unit tests.

pub mod input;
pub mod judge;
pub mod session;
pub mod shot;

pub use input::InputAction;
pub use judge::{Surface, Verdict, judge};
pub use session::{BoundaryCmd, GameEvent, MatchPhase, Session};
pub use shot::ShotParams;
