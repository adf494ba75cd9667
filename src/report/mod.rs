//! Report module - rendering results of the single-shot calculators

mod basics;
mod circle;
mod interest;

pub use basics::*;
pub use circle::*;
pub use interest::*;
