//! Feature engineering and label construction
//!
//! Derives model-ready feature columns from a candle series and the
//! forward-looking training label. Features at index `t` use only candles
//! at or before `t`; the label is the only intentionally forward-looking
//! value and is never part of the feature output.

pub mod engineer;
pub mod frame;
pub mod labels;

pub use engineer::*;
pub use frame::*;
pub use labels::*;
