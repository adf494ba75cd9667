//! Compound interest: A = P(1 + r/n)^(nt)

use thiserror::Error;

/// Errors for compound interest inputs
#[derive(Debug, Error, PartialEq)]
pub enum FormulaError {
    /// Interest must be compounded at least once per year
    #[error("interest must be compounded at least once per year")]
    ZeroCompounding,

    /// Principal or rate is NaN or infinite
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Inputs to a compound interest calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestTerms {
    /// Initial amount of money
    pub principal: f64,
    /// Annual interest rate in percent (5.0 means 5%)
    pub rate_percent: f64,
    /// Number of times interest is compounded per year
    pub compounds_per_year: u32,
    /// Number of years the money is invested
    pub years: u32,
}

/// Result of a compound interest calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestOutcome {
    /// Total amount after the term, principal included
    pub amount: f64,
    /// Interest earned (amount - principal)
    pub interest: f64,
}

/// Compute the amount accumulated and the interest earned
pub fn compound_interest(terms: &InterestTerms) -> Result<InterestOutcome, FormulaError> {
    if !terms.principal.is_finite() {
        return Err(FormulaError::NonFinite {
            name: "principal",
            value: terms.principal,
        });
    }
    if !terms.rate_percent.is_finite() {
        return Err(FormulaError::NonFinite {
            name: "rate",
            value: terms.rate_percent,
        });
    }
    if terms.compounds_per_year == 0 {
        return Err(FormulaError::ZeroCompounding);
    }

    let n = f64::from(terms.compounds_per_year);
    let rate = terms.rate_percent / 100.0;
    let periods = n * f64::from(terms.years);
    let amount = terms.principal * (1.0 + rate / n).powf(periods);

    Ok(InterestOutcome {
        amount,
        interest: amount - terms.principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(principal: f64, rate_percent: f64, n: u32, years: u32) -> InterestTerms {
        InterestTerms {
            principal,
            rate_percent,
            compounds_per_year: n,
            years,
        }
    }

    #[test]
    fn test_annual_compounding() {
        let out = compound_interest(&terms(1000.0, 10.0, 1, 2)).unwrap();
        assert!((out.amount - 1210.0).abs() < 1e-9);
        assert!((out.interest - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_compounding() {
        let out = compound_interest(&terms(1000.0, 5.0, 12, 10)).unwrap();
        assert!((out.amount - 1647.009497).abs() < 1e-5);
    }

    #[test]
    fn test_zero_years_earns_nothing() {
        let out = compound_interest(&terms(500.0, 7.5, 4, 0)).unwrap();
        assert_eq!(out.amount, 500.0);
        assert_eq!(out.interest, 0.0);
    }

    #[test]
    fn test_zero_compounding_rejected() {
        assert_eq!(
            compound_interest(&terms(100.0, 5.0, 0, 1)),
            Err(FormulaError::ZeroCompounding)
        );
    }

    #[test]
    fn test_non_finite_principal_rejected() {
        let err = compound_interest(&terms(f64::INFINITY, 5.0, 1, 1)).unwrap_err();
        assert!(err.to_string().starts_with("principal must be a finite number"));
    }
}
