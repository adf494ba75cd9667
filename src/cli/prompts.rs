//! Interactive prompts using dialoguer
//!
//! On a terminal missing values are asked for with dialoguer. When stdin is
//! piped each prompt reads one line instead, so the commands can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use dialoguer::Input;

use super::args::{InterestArgs, ProfileArgs};
use crate::formulas::InterestTerms;
use crate::menu::{parse_value, read_line};
use crate::report::Profile;

/// Whether dialoguer can drive the prompts
fn is_interactive() -> bool {
    console::user_attended_stderr() && io::stdin().is_terminal()
}

/// Print a prompt and read one trimmed answer line, failing at end of input
pub fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    write!(output, "[#] {}: ", message)?;
    output.flush()?;
    let line = read_line(input)
        .with_context(|| format!("Failed to read input for: {}", message))?
        .ok_or_else(|| anyhow!("No input left for: {}", message))?;
    Ok(line.trim().to_string())
}

/// Parse a piped answer, naming the prompt on failure
pub fn parse_answer<T>(text: &str, message: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: ToString,
{
    text.parse::<T>().map_err(|e| {
        anyhow!(
            "Invalid value '{}' for: {} ({})",
            text,
            message,
            e.to_string()
        )
    })
}

fn read_piped(message: &str) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_answer(&mut stdin.lock(), &mut stdout.lock(), message)
}

/// Use the supplied value, or ask for one
fn value_or_prompt<T>(value: Option<T>, message: &str) -> Result<T>
where
    T: Clone + ToString + FromStr,
    <T as FromStr>::Err: ToString,
{
    match value {
        Some(v) => Ok(v),
        None if is_interactive() => Input::<T>::new()
            .with_prompt(format!("[#] {}", message))
            .interact_text()
            .with_context(|| format!("Failed to read input for: {}", message)),
        None => parse_answer(&read_piped(message)?, message),
    }
}

/// Ask for a finite floating-point number unless one was supplied
pub fn prompt_number(value: Option<f64>, message: &str) -> Result<f64> {
    if let Some(v) = value {
        return Ok(v);
    }
    if !is_interactive() {
        let answer = read_piped(message)?;
        return parse_value(&answer).with_context(|| format!("Invalid input for: {}", message));
    }
    Input::<f64>::new()
        .with_prompt(format!("[#] {}", message))
        .validate_with(|v: &f64| -> Result<(), &str> {
            if v.is_finite() {
                Ok(())
            } else {
                Err("Please enter a finite number")
            }
        })
        .interact_text()
        .with_context(|| format!("Failed to read input for: {}", message))
}

/// Ask for a line of text unless it was supplied
pub fn prompt_text(value: Option<String>, message: &str) -> Result<String> {
    value_or_prompt(value, message)
}

/// Collect compound interest terms, prompting for whatever is missing
pub fn collect_interest_terms(args: &InterestArgs) -> Result<InterestTerms> {
    const COMPOUNDS: &str = "Enter the number of times that interest is compounded per year";

    let principal = prompt_number(args.principal, "Enter the principal amount ($)")?;
    let rate_percent = prompt_number(
        args.rate,
        "Enter the annual interest rate (in percentage)",
    )?;

    let compounds_per_year = match args.compounds {
        Some(n) => n,
        None if is_interactive() => Input::<u32>::new()
            .with_prompt(format!("[#] {}", COMPOUNDS))
            .validate_with(|n: &u32| -> Result<(), &str> {
                if *n > 0 {
                    Ok(())
                } else {
                    Err("Interest must be compounded at least once per year")
                }
            })
            .interact_text()
            .context("Failed to read compounding frequency")?,
        None => {
            let n: u32 = parse_answer(&read_piped(COMPOUNDS)?, COMPOUNDS)?;
            if n == 0 {
                bail!("Interest must be compounded at least once per year");
            }
            n
        }
    };

    let years = value_or_prompt(args.years, "Enter the time in years")?;

    Ok(InterestTerms {
        principal,
        rate_percent,
        compounds_per_year,
        years,
    })
}

/// Collect profile details, prompting for whatever is missing
pub fn collect_profile(args: &ProfileArgs) -> Result<Profile> {
    Ok(Profile {
        name: prompt_text(args.name.clone(), "Enter your name")?,
        age: value_or_prompt(args.age, "Enter your age")?,
        grade: value_or_prompt(args.grade, "Enter your C language grade")?,
        gpa: prompt_number(args.gpa, "Enter your GPA")?,
    })
}
