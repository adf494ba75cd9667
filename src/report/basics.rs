//! Straight-line reports: arithmetic, greeting and profile echo

use std::io::{self, Write};

use crate::menu::DisplayConfig;
use crate::utils::{format_fixed, Marker};

/// Sum and product of an integer and a float
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arithmetic {
    pub a: i64,
    pub b: f64,
}

impl Arithmetic {
    pub fn sum(&self) -> f64 {
        self.a as f64 + self.b
    }

    pub fn product(&self) -> f64 {
        self.a as f64 * self.b
    }
}

pub fn write_arithmetic_report<W: Write>(
    out: &mut W,
    arithmetic: &Arithmetic,
    display: DisplayConfig,
) -> io::Result<()> {
    let info = Marker::Info.styled(display.color);
    let b = format_fixed(arithmetic.b, 1);
    writeln!(
        out,
        "\n{} The sum of {} and {} is: {}",
        info,
        arithmetic.a,
        b,
        format_fixed(arithmetic.sum(), 1)
    )?;
    writeln!(
        out,
        "{} The multiplication of {} and {} is: {}",
        info,
        arithmetic.a,
        b,
        format_fixed(arithmetic.product(), 1)
    )
}

/// Greeting followed by a location sentence built by concatenation
pub fn write_greeting<W: Write>(
    out: &mut W,
    greeting: &str,
    name: &str,
    location: &str,
    display: DisplayConfig,
) -> io::Result<()> {
    let info = Marker::Info.styled(display.color);
    let mut sentence = String::from("Your Location is: ");
    sentence.push_str(location);

    writeln!(out, "\n{} {} {}", info, greeting, name)?;
    writeln!(out, "{} {}", info, sentence)
}

/// Details collected by the `profile` command
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub grade: char,
    pub gpa: f64,
}

pub fn write_profile<W: Write>(
    out: &mut W,
    profile: &Profile,
    display: DisplayConfig,
) -> io::Result<()> {
    let info = Marker::Info.styled(display.color);
    writeln!(out, "\n{} Name: {}", info, profile.name)?;
    writeln!(out, "{} Age: {}", info, profile.age)?;
    writeln!(out, "{} C Language Grade: {}", info, profile.grade)?;
    writeln!(
        out,
        "{} GPA: {}",
        info,
        format_fixed(profile.gpa, display.precision)
    )?;
    writeln!(out, "{} User input completed.", info)
}
