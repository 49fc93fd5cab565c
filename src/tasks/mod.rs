//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Cache reaper: removes expired cache entries on a fixed cadence

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
