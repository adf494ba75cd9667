//! Formulas module - pure numeric conversions and calculations

mod finance;
mod geometry;
mod weight;

pub use finance::*;
pub use geometry::*;
pub use weight::*;

/// A scalar conversion selectable from a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    PoundsToKilograms,
    KilogramsToPounds,
    CircleArea,
    Circumference,
    SphereSurfaceArea,
    SphereVolume,
}

impl Conversion {
    /// Apply the conversion. Pure, with no failure mode for finite input.
    pub fn convert(self, value: f64) -> f64 {
        match self {
            Conversion::PoundsToKilograms => lb_to_kg(value),
            Conversion::KilogramsToPounds => kg_to_lb(value),
            Conversion::CircleArea => circle_area(value),
            Conversion::Circumference => circumference(value),
            Conversion::SphereSurfaceArea => sphere_surface_area(value),
            Conversion::SphereVolume => sphere_volume(value),
        }
    }
}

/// Apply `op` to `value`
pub fn convert(op: Conversion, value: f64) -> f64 {
    op.convert(value)
}
