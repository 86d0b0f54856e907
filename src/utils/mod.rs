/// Module containing environment variable helpers
pub mod config;
/// Module containing currency conversion utilities (micros <-> units)
pub mod finance;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use finance::*;
pub use logger::*;
