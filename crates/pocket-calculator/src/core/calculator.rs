//! Stateful calculator used by the frontends

use tracing::{debug, warn};

use crate::core::history::History;
use crate::core::state::{CalculatorState, Input};
use crate::core::{CalcError, CalcResult, CalculatorConfig, Digit, Operator};

/// Keypad calculator: state machine plus configuration and history
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    history: History,
    last_error: Option<CalcError>,
}

impl Calculator {
    /// Text shown instead of the display while an error is latched
    pub const ERROR_TEXT: &'static str = "Error";

    /// Creates a calculator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            history: History::with_capacity(config.history_capacity),
            config,
            last_error: None,
        }
    }

    /// Handles one input event.
    ///
    /// On failure the calculator resets to its initial state and the error
    /// is latched until the next input; the error is also returned.
    pub fn press(&mut self, input: Input) -> CalcResult<()> {
        self.last_error = None;
        match self.state.step(input, &self.config) {
            Ok(step) => {
                if let Some(calculation) = step.completed {
                    debug!(%calculation, "calculation completed");
                    self.history.push(calculation);
                }
                self.state = step.state;
                debug!(
                    %input,
                    display = self.state.display(),
                    phase = ?self.state.phase(),
                    "input handled"
                );
                Ok(())
            }
            Err(err) => {
                warn!(%input, error = %err, "input rejected, resetting");
                self.state = CalculatorState::new();
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Enters a digit
    pub fn enter_digit(&mut self, digit: Digit) -> CalcResult<()> {
        self.press(Input::Digit(digit))
    }

    /// Enters the decimal point
    pub fn enter_decimal_point(&mut self) -> CalcResult<()> {
        self.press(Input::DecimalPoint)
    }

    /// Chooses an operator, resolving a pending one first when chained
    pub fn choose_operator(&mut self, operator: Operator) -> CalcResult<()> {
        self.press(Input::Operator(operator))
    }

    /// Evaluates the pending operation
    pub fn evaluate(&mut self) -> CalcResult<()> {
        self.press(Input::Equals)
    }

    /// Resets the state. History is kept.
    pub fn clear(&mut self) {
        self.state = CalculatorState::new();
        self.last_error = None;
        debug!("calculator cleared");
    }

    /// Negates the display
    pub fn toggle_sign(&mut self) -> CalcResult<()> {
        self.press(Input::ToggleSign)
    }

    /// Divides the display by 100
    pub fn percentage(&mut self) -> CalcResult<()> {
        self.press(Input::Percent)
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Display value
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// What the display region shows: the display value, or
    /// [`Self::ERROR_TEXT`] after a failed input
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.last_error.is_some() {
            Self::ERROR_TEXT
        } else {
            self.state.display()
        }
    }

    /// Secondary line, present while an operation is pending
    #[must_use]
    pub fn pending_line(&self) -> Option<String> {
        self.state.pending_line()
    }

    /// Error raised by the last input, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Completed calculations
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Drops all recorded calculations
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
