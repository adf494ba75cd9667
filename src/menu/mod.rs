//! Menu-driven conversion loop
//!
//! A `ConversionMenu` prints a numbered list of operations, reads the user's
//! choice and a single value, prints the converted result and starts over
//! until the user picks `0` or the input runs out.
//!
//! The loop is an explicit state machine (`MenuState`) advanced one
//! transition at a time by [`ConversionMenu::step`]. Input is consumed a
//! whole line at a time, so a malformed line is discarded in full before the
//! menu is shown again.

mod error;
mod option;

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

pub use error::{InputError, MenuError};
pub use option::*;

use crate::formulas::convert;
use crate::utils::{format_fixed, Marker};

/// Decimal places used when no precision is configured
pub const DEFAULT_PRECISION: usize = 2;

/// Presentation settings for printed values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Decimal places for printed floats. Computation always uses full precision.
    pub precision: usize,
    /// Color the line markers
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            color: false,
        }
    }
}

/// Where the menu loop currently is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuState {
    AwaitingChoice,
    /// Index into the menu's options
    AwaitingValue(usize),
    Reporting {
        option: usize,
        value: f64,
        result: f64,
    },
    Exited,
}

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Exit,
    /// Index into the menu's options
    Operation(usize),
}

/// Interactive loop over a fixed set of numbered conversions
#[derive(Debug, Clone)]
pub struct ConversionMenu {
    title: String,
    options: Vec<MenuOption>,
    display: DisplayConfig,
}

impl ConversionMenu {
    /// Build a menu, rejecting empty menus, duplicate codes and use of the exit code
    pub fn new(title: &str, options: Vec<MenuOption>) -> Result<Self, MenuError> {
        if options.is_empty() {
            return Err(MenuError::Empty);
        }

        let mut seen = HashSet::new();
        for option in &options {
            if option.code == EXIT_CODE {
                return Err(MenuError::ReservedCode {
                    label: option.label.clone(),
                });
            }
            if !seen.insert(option.code) {
                return Err(MenuError::DuplicateCode(option.code));
            }
        }

        Ok(Self {
            title: title.to_string(),
            options,
            display: DisplayConfig::default(),
        })
    }

    /// One of the built-in menus
    pub fn builtin(kind: MenuKind) -> Result<Self, MenuError> {
        Self::new(kind.title(), kind.options())
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn display(&self) -> DisplayConfig {
        self.display
    }

    /// Interpret a line entered at the choice prompt
    pub fn parse_choice(&self, line: &str) -> Result<Choice, InputError> {
        let text = line.trim();
        let code: u32 = text
            .parse()
            .map_err(|_| InputError::InvalidChoice(text.to_string()))?;

        if code == EXIT_CODE {
            return Ok(Choice::Exit);
        }

        self.options
            .iter()
            .position(|o| o.code == code)
            .map(Choice::Operation)
            .ok_or_else(|| InputError::InvalidChoice(text.to_string()))
    }

    /// Run the loop until the user exits or the input ends
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<()> {
        log::info!("starting menu '{}'", self.title);

        let mut state = MenuState::AwaitingChoice;
        while state != MenuState::Exited {
            let next = self.step(state, input, output)?;
            log::debug!("{:?} -> {:?}", state, next);
            state = next;
        }

        log::info!("menu '{}' exited", self.title);
        Ok(())
    }

    /// Perform exactly one state transition
    pub fn step<R: BufRead, W: Write>(
        &self,
        state: MenuState,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<MenuState> {
        match state {
            MenuState::AwaitingChoice => {
                self.write_menu(output)?;
                let Some(line) = read_line(input)? else {
                    return self.exit(output);
                };
                match self.parse_choice(&line) {
                    Ok(Choice::Exit) => self.exit(output),
                    Ok(Choice::Operation(index)) => Ok(MenuState::AwaitingValue(index)),
                    Err(err) => {
                        self.write_warning(output, &err)?;
                        Ok(MenuState::AwaitingChoice)
                    }
                }
            }
            MenuState::AwaitingValue(index) => {
                let Some(option) = self.options.get(index) else {
                    log::debug!("no option at index {}", index);
                    return Ok(MenuState::AwaitingChoice);
                };
                write!(
                    output,
                    "\n{} Enter {}: ",
                    Marker::Prompt.styled(self.display.color),
                    option.prompt
                )?;
                output.flush()?;

                let Some(line) = read_line(input)? else {
                    return self.exit(output);
                };
                let converted = parse_value(&line).and_then(|value| {
                    let result = convert(option.conversion, value);
                    if result.is_finite() {
                        Ok((value, result))
                    } else {
                        Err(InputError::InvalidValue(line.trim().to_string()))
                    }
                });
                match converted {
                    Ok((value, result)) => Ok(MenuState::Reporting {
                        option: index,
                        value,
                        result,
                    }),
                    Err(err) => {
                        self.write_warning(output, &err)?;
                        Ok(MenuState::AwaitingChoice)
                    }
                }
            }
            MenuState::Reporting {
                option,
                value,
                result,
            } => {
                let Some(option) = self.options.get(option) else {
                    return Ok(MenuState::AwaitingChoice);
                };
                let precision = self.display.precision;
                writeln!(
                    output,
                    "{} {} {} = {} {}\n",
                    Marker::Info.styled(self.display.color),
                    format_fixed(value, precision),
                    option.from_unit,
                    format_fixed(result, precision),
                    option.to_unit
                )?;
                Ok(MenuState::AwaitingChoice)
            }
            MenuState::Exited => Ok(MenuState::Exited),
        }
    }

    fn write_menu<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let info = Marker::Info.styled(self.display.color);
        writeln!(output, "{} {}", info, self.title)?;
        for option in &self.options {
            writeln!(output, "{} {}. {}", info, option.code, option.label)?;
        }
        writeln!(output, "{} {}. Exit", info, EXIT_CODE)?;
        write!(
            output,
            "{} Enter your choice: ",
            Marker::Prompt.styled(self.display.color)
        )?;
        output.flush()
    }

    fn write_warning<W: Write>(&self, output: &mut W, err: &InputError) -> io::Result<()> {
        log::debug!("rejected input: {}", err);
        writeln!(
            output,
            "\n{} {}\n",
            Marker::Warning.styled(self.display.color),
            err
        )
    }

    fn exit<W: Write>(&self, output: &mut W) -> io::Result<MenuState> {
        writeln!(
            output,
            "\n{} Exiting...",
            Marker::Exit.styled(self.display.color)
        )?;
        output.flush()?;
        Ok(MenuState::Exited)
    }
}

/// Interpret a line entered at the value prompt
pub fn parse_value(line: &str) -> Result<f64, InputError> {
    let text = line.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidValue(text.to_string())),
    }
}

/// Read one line without its terminator, or `None` at end of input.
/// Bytes that are not UTF-8 are replaced so the line can still be rejected as malformed text.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
