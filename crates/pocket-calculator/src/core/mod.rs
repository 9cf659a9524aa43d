//! Core calculator: digits, operators, number formatting and the
//! single-pending-operation state machine.
//!
//! Nothing in here knows about buttons or the DOM. Frontends feed
//! [`Input`] events into a [`Calculator`] and render what it reports.

mod calculator;
pub mod config;
pub mod history;
pub mod number;
mod operations;
pub mod state;

pub use calculator::Calculator;
pub use config::{CalculatorConfig, DivisionByZeroPolicy};
pub use operations::{Digit, Operator};
pub use state::{CalculatorState, Input, PendingOperation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Digit value outside `0..=9`
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
    /// Character that is not an ASCII decimal digit
    #[error("Invalid digit character: {0:?}")]
    InvalidDigitChar(char),
    /// Operator symbol not in `+ - × ÷`
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
    /// Keypad click on an element id that is not a button
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
    /// Division by zero under [`DivisionByZeroPolicy::Error`]
    #[error("Division by zero")]
    DivisionByZero,
    /// Display text that does not parse as a number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    /// Malformed calculator configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
