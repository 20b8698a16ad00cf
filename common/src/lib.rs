//! Shared infrastructure for the sumbench workspace.

pub mod cpu_features;
pub mod log_setup;
pub mod parallel;

pub fn is_debug() -> bool {
    cfg!(debug_assertions)
}
