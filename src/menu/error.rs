//! Error types for the conversion menu.
//!
//! `InputError` covers the two recoverable problems with what the user
//! typed; both are reported as a warning line and the loop carries on.
//! `MenuError` covers menus that cannot be built at all.

use thiserror::Error;

/// Recoverable problems with a line of user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// The entered code matches no operation and is not the exit code.
    #[error("Invalid choice '{0}'! Please try again.")]
    InvalidChoice(String),

    /// The entered value is not a finite number.
    #[error("Invalid value '{0}'! Expected a number.")]
    InvalidValue(String),
}

/// Problems with a menu definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    /// A menu needs at least one operation besides exit.
    #[error("menu has no operations")]
    Empty,

    /// Code 0 is reserved for the exit option.
    #[error("option '{label}' uses the reserved exit code 0")]
    ReservedCode { label: String },

    /// Two options share the same code.
    #[error("duplicate menu code {0}")]
    DuplicateCode(u32),
}
