//! Command-line argument definitions using clap

use clap::{Args, Parser, Subcommand};

use crate::menu::{DisplayConfig, MenuKind, DEFAULT_PRECISION};

/// Largest accepted --precision
pub const MAX_PRECISION: usize = 10;

/// Basics - menu-driven conversions and small console calculators
#[derive(Parser, Debug)]
#[command(name = "basics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Decimal places shown for floating-point results
    #[arg(long, global = true, default_value_t = DEFAULT_PRECISION, value_parser = validate_precision)]
    pub precision: usize,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert weights between pounds and kilograms (default)
    Weight,

    /// Circle and sphere measurements from a radius
    Circle {
        /// Print every measurement for this radius instead of opening the menu
        #[arg(short, long, value_parser = validate_finite)]
        radius: Option<f64>,
    },

    /// Compound interest on a principal amount
    Interest(InterestArgs),

    /// Sum and product of two numbers
    Arithmetic {
        /// Integer operand
        #[arg(short, long, default_value = "5", allow_negative_numbers = true)]
        a: i64,

        /// Floating-point operand
        #[arg(short, long, default_value = "2.5", allow_negative_numbers = true, value_parser = validate_finite)]
        b: f64,
    },

    /// Greet someone and tell them where they are
    Greet {
        /// Greeting word
        #[arg(short, long, default_value = "Hi")]
        greeting: String,

        /// Name to greet (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Location (prompted if omitted)
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Echo back a short student profile
    Profile(ProfileArgs),
}

/// Compound interest inputs; any omitted value is prompted for
#[derive(Args, Debug, Default)]
pub struct InterestArgs {
    /// Principal amount
    #[arg(short, long, value_parser = validate_finite)]
    pub principal: Option<f64>,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = validate_finite)]
    pub rate: Option<f64>,

    /// Times interest is compounded per year
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub compounds: Option<u32>,

    /// Time in years
    #[arg(short = 't', long)]
    pub years: Option<u32>,
}

/// Profile fields; any omitted value is prompted for
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub age: Option<u32>,

    /// C language grade (a single character)
    #[arg(long)]
    pub grade: Option<char>,

    #[arg(long, value_parser = validate_finite)]
    pub gpa: Option<f64>,
}

impl Cli {
    /// Display settings derived from the global flags
    pub fn display_config(&self, color_supported: bool) -> DisplayConfig {
        DisplayConfig {
            precision: self.precision,
            color: color_supported && !self.no_color,
        }
    }

    /// Menu to run, if the command is menu-driven
    pub fn menu_kind(&self) -> Option<MenuKind> {
        match &self.command {
            None | Some(Commands::Weight) => Some(MenuKind::Weight),
            Some(Commands::Circle { radius: None }) => Some(MenuKind::Circle),
            _ => None,
        }
    }
}

/// Validator for the precision flag
fn validate_precision(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of decimal places", s))?;

    if value > MAX_PRECISION {
        Err(format!(
            "precision must be at most {}, got {}",
            MAX_PRECISION, value
        ))
    } else {
        Ok(value)
    }
}

/// Validator for floating-point values that must be finite
fn validate_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' must be a finite number", s))
    }
}
