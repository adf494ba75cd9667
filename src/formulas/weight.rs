//! Weight conversion between pounds and kilograms

/// Pounds in one kilogram
pub const POUNDS_PER_KILOGRAM: f64 = 2.2046;

/// Convert kilograms to pounds
pub fn kg_to_lb(kilograms: f64) -> f64 {
    kilograms * POUNDS_PER_KILOGRAM
}

/// Convert pounds to kilograms
pub fn lb_to_kg(pounds: f64) -> f64 {
    pounds / POUNDS_PER_KILOGRAM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_to_lb() {
        assert!((kg_to_lb(10.0) - 22.046).abs() < 1e-9);
        assert_eq!(kg_to_lb(0.0), 0.0);
    }

    #[test]
    fn test_lb_to_kg() {
        assert!((lb_to_kg(10.0) - 4.535970244).abs() < 1e-9);
        assert_eq!(lb_to_kg(0.0), 0.0);
    }

    #[test]
    fn test_negative_weights_are_not_rejected() {
        assert!((kg_to_lb(-1.0) + POUNDS_PER_KILOGRAM).abs() < 1e-12);
    }
}
