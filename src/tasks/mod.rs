//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Expiry sweep: removes expired response cache entries every interval

mod sweep;

pub use sweep::{spawn_sweep_task, SweepHandle};
