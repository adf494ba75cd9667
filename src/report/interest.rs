//! Compound interest summary

use std::io::{self, Write};

use crate::formulas::{InterestOutcome, InterestTerms};
use crate::menu::DisplayConfig;
use crate::utils::{format_fixed, Marker};

pub fn write_interest_report<W: Write>(
    out: &mut W,
    terms: &InterestTerms,
    outcome: &InterestOutcome,
    display: DisplayConfig,
) -> io::Result<()> {
    let info = Marker::Info.styled(display.color);
    writeln!(
        out,
        "\n{} The compound interest is: ${}",
        info,
        format_fixed(outcome.interest, display.precision)
    )?;
    writeln!(
        out,
        "{} The total amount after {} years is: ${}",
        info,
        terms.years,
        format_fixed(outcome.amount, display.precision)
    )
}
