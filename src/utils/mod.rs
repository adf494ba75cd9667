//! Utility module - console styling helpers

mod styling;

pub use styling::*;
