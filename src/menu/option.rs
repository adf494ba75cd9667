//! Menu entries and the built-in menu catalogs

use crate::formulas::Conversion;

/// Code reserved for leaving the menu
pub const EXIT_CODE: u32 = 0;

/// One numbered operation in a conversion menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption {
    pub code: u32,
    /// Shown in the option list, e.g. "Pounds to Kilograms"
    pub label: String,
    /// Completes "Enter ...", e.g. "weight in pounds"
    pub prompt: String,
    pub from_unit: String,
    pub to_unit: String,
    pub conversion: Conversion,
}

impl MenuOption {
    pub fn new(
        code: u32,
        label: &str,
        prompt: &str,
        from_unit: &str,
        to_unit: &str,
        conversion: Conversion,
    ) -> Self {
        Self {
            code,
            label: label.to_string(),
            prompt: prompt.to_string(),
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            conversion,
        }
    }
}

/// Which built-in menu to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Weight,
    Circle,
}

impl MenuKind {
    pub fn title(self) -> &'static str {
        match self {
            MenuKind::Weight => "Weight Converter",
            MenuKind::Circle => "Circle Calculator",
        }
    }

    pub fn options(self) -> Vec<MenuOption> {
        match self {
            MenuKind::Weight => weight_options(),
            MenuKind::Circle => circle_options(),
        }
    }
}

/// Pounds/kilograms in both directions
pub fn weight_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new(
            1,
            "Pounds to Kilograms",
            "weight in pounds",
            "pounds",
            "kilograms",
            Conversion::PoundsToKilograms,
        ),
        MenuOption::new(
            2,
            "Kilograms to Pounds",
            "weight in kilograms",
            "kilograms",
            "pounds",
            Conversion::KilogramsToPounds,
        ),
    ]
}

/// Circle and sphere measurements from a radius
pub fn circle_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new(
            1,
            "Area of the circle",
            "the radius of the circle",
            "radius",
            "area",
            Conversion::CircleArea,
        ),
        MenuOption::new(
            2,
            "Circumference of the circle",
            "the radius of the circle",
            "radius",
            "circumference",
            Conversion::Circumference,
        ),
        MenuOption::new(
            3,
            "Surface area of the sphere",
            "the radius of the sphere",
            "radius",
            "surface area",
            Conversion::SphereSurfaceArea,
        ),
        MenuOption::new(
            4,
            "Volume of the sphere",
            "the radius of the sphere",
            "radius",
            "volume",
            Conversion::SphereVolume,
        ),
    ]
}
