//! Configuration module

pub mod gate;
pub mod signal;

pub use gate::*;
pub use signal::*;
