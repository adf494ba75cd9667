//! Circle and sphere measurements for a given radius

use std::f64::consts::PI;

/// Area of a circle: A = πr²
pub fn circle_area(radius: f64) -> f64 {
    PI * radius.powi(2)
}

/// Circumference of a circle: C = 2πr
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Surface area of a sphere: SA = 4πr²
pub fn sphere_surface_area(radius: f64) -> f64 {
    4.0 * PI * radius.powi(2)
}

/// Volume of a sphere: V = (4/3)πr³
pub fn sphere_volume(radius: f64) -> f64 {
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// All four measurements for one radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMeasurements {
    pub radius: f64,
    pub area: f64,
    pub circumference: f64,
    pub surface_area: f64,
    pub volume: f64,
}

impl CircleMeasurements {
    pub fn from_radius(radius: f64) -> Self {
        Self {
            radius,
            area: circle_area(radius),
            circumference: circumference(radius),
            surface_area: sphere_surface_area(radius),
            volume: sphere_volume(radius),
        }
    }
}
