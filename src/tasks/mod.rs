//! Background Tasks Module
//!
//! # Tasks
//! - TTL Sweep: Removes stale cached responses at configured intervals
//! - Roster Load: Builds the roster once at startup

mod cleanup;
mod startup;

pub use cleanup::spawn_cleanup_task;
pub use startup::spawn_roster_load;
