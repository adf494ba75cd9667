//! Basics: Conversion Menus and Console Calculators
//!
//! Runs the weight converter by default; subcommands select the circle
//! calculator and the single-shot calculators.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use basics::cli::{collect_interest_terms, collect_profile, prompt_text, Cli, Commands};
use basics::formulas::{compound_interest, CircleMeasurements};
use basics::menu::{ConversionMenu, DisplayConfig, MenuKind};
use basics::report::{
    write_arithmetic_report, write_circle_report, write_greeting, write_interest_report,
    write_profile, Arithmetic,
};
use basics::utils::stdout_supports_color;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let display = cli.display_config(stdout_supports_color());
    log::debug!("{:?}, display: {:?}", cli, display);

    if let Some(kind) = cli.menu_kind() {
        return run_menu(kind, display);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Circle {
            radius: Some(radius),
        }) => {
            let measurements = CircleMeasurements::from_radius(radius);
            write_circle_report(&mut out, &measurements, display)?;
        }
        Some(Commands::Interest(args)) => {
            let terms = collect_interest_terms(&args)?;
            let outcome = compound_interest(&terms).context("Invalid compound interest terms")?;
            write_interest_report(&mut out, &terms, &outcome, display)?;
        }
        Some(Commands::Arithmetic { a, b }) => {
            write_arithmetic_report(&mut out, &Arithmetic { a, b }, display)?;
        }
        Some(Commands::Greet {
            greeting,
            name,
            location,
        }) => {
            let name = prompt_text(name, "Enter your name")?;
            let location = prompt_text(location, "Enter your location")?;
            write_greeting(&mut out, &greeting, &name, &location, display)?;
        }
        Some(Commands::Profile(args)) => {
            let profile = collect_profile(&args)?;
            write_profile(&mut out, &profile, display)?;
        }
        // Menu-driven commands are handled above
        None | Some(Commands::Weight) | Some(Commands::Circle { radius: None }) => {}
    }

    out.flush()?;
    Ok(())
}

/// Run one of the conversion menus on stdin/stdout
fn run_menu(kind: MenuKind, display: DisplayConfig) -> Result<()> {
    let menu = ConversionMenu::builtin(kind)
        .context("Built-in menu is invalid")?
        .with_display(display);
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu.run(&mut stdin.lock(), &mut stdout.lock())
        .with_context(|| format!("{} failed on console I/O", kind.title()))
}
