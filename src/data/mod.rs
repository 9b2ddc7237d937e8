//! Candle data structures

pub mod candle;

pub use candle::*;
