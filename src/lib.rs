//! Basics: Conversion Menus and Console Calculators
//!
//! A library of small console programs built around a menu-driven
//! conversion loop, plus the pure formulas and report renderers they use.

pub mod cli;
pub mod formulas;
pub mod menu;
pub mod report;
pub mod utils;
