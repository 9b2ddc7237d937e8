//! Strategy engine module
//!
//! Predictor seam, entry/exit signal evaluation, and the batch pipeline
//! gluing features, predictions, and signals together.

pub mod evaluator;
pub mod pipeline;
pub mod predictor;

pub use evaluator::*;
pub use pipeline::*;
pub use predictor::*;
