//! Calculator state machine
//!
//! [`CalculatorState`] holds the display text, the pending operation and
//! the reset flag. Every transition consumes the state and returns the next
//! one, so a state value is never observed half-updated. The captured
//! operand and its operator live together in [`PendingOperation`]; one can
//! never be present without the other.

use std::fmt;

use serde::Serialize;

use crate::core::config::{CalculatorConfig, DivisionByZeroPolicy};
use crate::core::number::{format_number, is_plain_literal, parse_number};
use crate::core::{CalcResult, Digit, Operator};

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A digit button (0-9)
    Digit(Digit),
    /// The decimal point button
    DecimalPoint,
    /// One of the operator buttons
    Operator(Operator),
    /// The `=` button
    Equals,
    /// The `C` button
    Clear,
    /// The `±` button
    ToggleSign,
    /// The `%` button
    Percent,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::ToggleSign => f.write_str("±"),
            Self::Percent => f.write_str("%"),
        }
    }
}

/// The operation awaiting its second operand
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PendingOperation {
    /// No operation pending
    #[default]
    Idle,
    /// An operator was chosen; `previous_value` is its left operand
    PendingOperator {
        /// Display text captured when the operator was chosen
        previous_value: String,
        /// The chosen operator
        operator: Operator,
    },
}

/// Coarse phase of the state machine, derived from the state fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operation pending
    Idle,
    /// Operator just chosen, second operand not started
    PendingOperator,
    /// Second operand being entered
    Accumulating,
}

/// A completed `lhs op rhs = result` calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    /// Left operand as displayed
    pub lhs: String,
    /// Applied operator
    pub operator: Operator,
    /// Right operand as displayed
    pub rhs: String,
    /// Formatted result
    pub result: String,
}

impl Calculation {
    /// Returns the expression part, e.g. `7 × 8`
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.result)
    }
}

/// Result of a single transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The state after the input
    pub state: CalculatorState,
    /// The calculation resolved by this input, if any
    pub completed: Option<Calculation>,
}

/// Calculator state: display text, pending operation and reset flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    display: String,
    pending: PendingOperation,
    should_reset: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Display text of a fresh calculator
    pub const INITIAL_DISPLAY: &'static str = "0";

    /// Creates the initial state: `"0"`, nothing pending, no reset
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: Self::INITIAL_DISPLAY.to_string(),
            pending: PendingOperation::Idle,
            should_reset: false,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending operation
    #[must_use]
    pub fn pending(&self) -> &PendingOperation {
        &self.pending
    }

    /// Whether the next digit starts a fresh number
    #[must_use]
    pub fn should_reset(&self) -> bool {
        self.should_reset
    }

    /// Captured left operand, if an operation is pending
    #[must_use]
    pub fn previous_value(&self) -> Option<&str> {
        match &self.pending {
            PendingOperation::PendingOperator { previous_value, .. } => Some(previous_value),
            PendingOperation::Idle => None,
        }
    }

    /// Pending operator, if any
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        match self.pending {
            PendingOperation::PendingOperator { operator, .. } => Some(operator),
            PendingOperation::Idle => None,
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.pending, self.should_reset) {
            (PendingOperation::Idle, _) => Phase::Idle,
            (PendingOperation::PendingOperator { .. }, true) => Phase::PendingOperator,
            (PendingOperation::PendingOperator { .. }, false) => Phase::Accumulating,
        }
    }

    /// Secondary display line, e.g. `"7 ×"`, shown while an operation is pending
    #[must_use]
    pub fn pending_line(&self) -> Option<String> {
        match &self.pending {
            PendingOperation::PendingOperator {
                previous_value,
                operator,
            } => Some(format!("{previous_value} {operator}")),
            PendingOperation::Idle => None,
        }
    }

    /// Numeric value of the display
    pub fn value(&self) -> CalcResult<f64> {
        parse_number(&self.display)
    }

    /// Applies one input and returns the next state
    pub fn apply(&self, input: Input, config: &CalculatorConfig) -> CalcResult<Self> {
        self.step(input, config).map(|step| step.state)
    }

    /// Applies one input, also reporting any calculation it resolved
    pub fn step(&self, input: Input, config: &CalculatorConfig) -> CalcResult<Step> {
        let state = self.clone();
        let policy = config.division_by_zero;
        let (state, completed) = match input {
            Input::Digit(digit) => (state.enter_digit(digit), None),
            Input::DecimalPoint => (state.enter_decimal_point(), None),
            Input::Operator(op) => state.choose_operator_with(op, policy)?,
            Input::Equals => state.resolve(policy)?,
            Input::Clear => (state.clear(), None),
            Input::ToggleSign => (state.toggle_sign()?, None),
            Input::Percent => (state.percentage()?, None),
        };
        Ok(Step { state, completed })
    }

    /// Whether the next entry must start a new number instead of extending
    /// the display. Exponent and non-finite displays are never extended.
    fn starts_fresh(&self) -> bool {
        self.should_reset || !is_plain_literal(&self.display)
    }

    /// Enters a digit.
    ///
    /// Starts a new number after an operator or result, replaces a lone
    /// `"0"`, and appends otherwise.
    #[must_use]
    pub fn enter_digit(mut self, digit: Digit) -> Self {
        if self.starts_fresh() {
            self.display = digit.to_string();
            self.should_reset = false;
        } else if self.display == Self::INITIAL_DISPLAY {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
        self
    }

    /// Enters the decimal point; a second point in the same number is ignored
    #[must_use]
    pub fn enter_decimal_point(mut self) -> Self {
        if self.starts_fresh() {
            self.display = "0.".to_string();
            self.should_reset = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    /// Chooses an operator with the default division policy
    pub fn choose_operator(self, operator: Operator) -> CalcResult<Self> {
        self.choose_operator_with(operator, DivisionByZeroPolicy::default())
            .map(|(state, _)| state)
    }

    /// Evaluates the pending operation with the default division policy
    pub fn evaluate(self) -> CalcResult<Self> {
        self.resolve(DivisionByZeroPolicy::default())
            .map(|(state, _)| state)
    }

    fn choose_operator_with(
        self,
        operator: Operator,
        policy: DivisionByZeroPolicy,
    ) -> CalcResult<(Self, Option<Calculation>)> {
        // a second operand has been entered: resolve first so operators chain
        let (mut state, completed) = if self.phase() == Phase::Accumulating {
            self.resolve(policy)?
        } else {
            (self, None)
        };

        let previous_value = match std::mem::take(&mut state.pending) {
            PendingOperation::PendingOperator { previous_value, .. } => previous_value,
            PendingOperation::Idle => state.display.clone(),
        };
        state.pending = PendingOperation::PendingOperator {
            previous_value,
            operator,
        };
        state.should_reset = true;
        Ok((state, completed))
    }

    fn resolve(mut self, policy: DivisionByZeroPolicy) -> CalcResult<(Self, Option<Calculation>)> {
        let PendingOperation::PendingOperator {
            previous_value,
            operator,
        } = std::mem::take(&mut self.pending)
        else {
            return Ok((self, None));
        };

        let lhs = parse_number(&previous_value)?;
        let rhs = parse_number(&self.display)?;
        let result = format_number(operator.apply(lhs, rhs, policy)?);

        let completed = Calculation {
            lhs: previous_value,
            operator,
            rhs: self.display,
            result: result.clone(),
        };
        let state = Self {
            display: result,
            pending: PendingOperation::Idle,
            should_reset: true,
        };
        Ok((state, Some(completed)))
    }

    /// Resets everything to the initial state
    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Negates the displayed value
    pub fn toggle_sign(self) -> CalcResult<Self> {
        self.map_value(|v| -v)
    }

    /// Divides the displayed value by 100
    pub fn percentage(self) -> CalcResult<Self> {
        self.map_value(|v| v / 100.0)
    }

    fn map_value(mut self, f: impl FnOnce(f64) -> f64) -> CalcResult<Self> {
        self.display = format_number(f(self.value()?));
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    fn digit(d: u8) -> Digit {
        Digit::try_from(d).unwrap()
    }

    fn run(inputs: &[Input]) -> CalculatorState {
        let config = CalculatorConfig::default();
        inputs
            .iter()
            .fold(CalculatorState::new(), |state, input| {
                state.apply(*input, &config).unwrap()
            })
    }

    fn d(n: u8) -> Input {
        Input::Digit(digit(n))
    }

    // ===== Initial state =====

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending(), &PendingOperation::Idle);
        assert!(!state.should_reset());
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.pending_line().is_none());
    }

    // ===== Digits =====

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(run(&[d(1), d(2), d(3)]).display(), "123");
    }

    #[test]
    fn test_leading_zero_replaced() {
        assert_eq!(run(&[d(0)]).display(), "0");
        assert_eq!(run(&[d(0), d(0)]).display(), "0");
        assert_eq!(run(&[d(0), d(7)]).display(), "7");
    }

    #[test]
    fn test_zero_after_decimal_point_appends() {
        assert_eq!(run(&[d(0), Input::DecimalPoint, d(0), d(5)]).display(), "0.05");
    }

    #[test]
    fn test_digit_after_operator_starts_fresh() {
        let state = run(&[d(4), d(2), Input::Operator(Operator::Add), d(7)]);
        assert_eq!(state.display(), "7");
        assert!(!state.should_reset());
        assert_eq!(state.phase(), Phase::Accumulating);
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let state = run(&[d(2), Input::Operator(Operator::Add), d(2), Input::Equals, d(9)]);
        assert_eq!(state.display(), "9");
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_point_idempotent() {
        let state = run(&[d(3), Input::DecimalPoint, Input::DecimalPoint]);
        assert_eq!(state.display(), "3.");
        let state = run(&[d(3), Input::DecimalPoint, d(1), Input::DecimalPoint]);
        assert_eq!(state.display(), "3.1");
    }

    #[test]
    fn test_decimal_point_on_initial_display() {
        assert_eq!(run(&[Input::DecimalPoint]).display(), "0.");
    }

    #[test]
    fn test_decimal_point_after_operator() {
        let state = run(&[d(8), Input::Operator(Operator::Divide), Input::DecimalPoint, d(5)]);
        assert_eq!(state.display(), "0.5");
        assert_eq!(state.previous_value(), Some("8"));
    }

    // ===== Operators =====

    #[test]
    fn test_choose_operator_captures_display() {
        let state = run(&[d(7), Input::Operator(Operator::Multiply)]);
        assert_eq!(state.previous_value(), Some("7"));
        assert_eq!(state.operator(), Some(Operator::Multiply));
        assert!(state.should_reset());
        assert_eq!(state.phase(), Phase::PendingOperator);
        assert_eq!(state.pending_line().as_deref(), Some("7 ×"));
    }

    #[test]
    fn test_operator_replaced_without_digit() {
        let state = run(&[
            d(7),
            Input::Operator(Operator::Multiply),
            Input::Operator(Operator::Subtract),
        ]);
        assert_eq!(state.previous_value(), Some("7"));
        assert_eq!(state.operator(), Some(Operator::Subtract));
        assert_eq!(state.display(), "7");
    }

    #[test]
    fn test_chained_operators() {
        let state = run(&[
            d(3),
            Input::Operator(Operator::Add),
            d(4),
            Input::Operator(Operator::Add),
        ]);
        assert_eq!(state.display(), "7");
        assert_eq!(state.previous_value(), Some("7"));

        let state = run(&[
            d(3),
            Input::Operator(Operator::Add),
            d(4),
            Input::Operator(Operator::Add),
            d(5),
            Input::Equals,
        ]);
        assert_eq!(state.display(), "12");
        assert_eq!(state.pending(), &PendingOperation::Idle);
    }

    #[test]
    fn test_chain_with_different_operators() {
        let state = run(&[
            d(9),
            Input::Operator(Operator::Subtract),
            d(4),
            Input::Operator(Operator::Multiply),
            d(3),
            Input::Equals,
        ]);
        assert_eq!(state.display(), "15");
    }

    // ===== Evaluate =====

    #[test]
    fn test_evaluate_multiply() {
        let state = run(&[d(7), Input::Operator(Operator::Multiply), d(8), Input::Equals]);
        assert_eq!(state.display(), "56");
        assert!(state.should_reset());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_evaluate_idle_is_noop() {
        let state = run(&[d(4), d(2), Input::Equals]);
        assert_eq!(state.display(), "42");
        assert!(!state.should_reset());
    }

    #[test]
    fn test_evaluate_without_second_operand_reuses_display() {
        let state = run(&[d(7), Input::Operator(Operator::Multiply), Input::Equals]);
        assert_eq!(state.display(), "49");
    }

    #[test]
    fn test_evaluate_division_by_zero_yields_zero() {
        let state = run(&[d(9), Input::Operator(Operator::Divide), d(0), Input::Equals]);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_evaluate_division_by_zero_error_policy() {
        let config =
            CalculatorConfig::default().with_division_by_zero(DivisionByZeroPolicy::Error);
        let state = run(&[d(9), Input::Operator(Operator::Divide), d(0)]);
        assert_eq!(
            state.apply(Input::Equals, &config),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_evaluate_floating_point_result() {
        let state = run(&[
            Input::DecimalPoint,
            d(1),
            Input::Operator(Operator::Add),
            Input::DecimalPoint,
            d(2),
            Input::Equals,
        ]);
        assert_eq!(state.display(), "0.30000000000000004");
    }

    #[test]
    fn test_step_reports_calculation() {
        let config = CalculatorConfig::default();
        let state = run(&[d(7), Input::Operator(Operator::Multiply), d(8)]);
        let step = state.step(Input::Equals, &config).unwrap();
        let calc = step.completed.unwrap();
        assert_eq!(calc.to_string(), "7 × 8 = 56");
        assert_eq!(calc.expression(), "7 × 8");
    }

    #[test]
    fn test_step_without_calculation() {
        let config = CalculatorConfig::default();
        let step = CalculatorState::new().step(d(1), &config).unwrap();
        assert!(step.completed.is_none());
    }

    #[test]
    fn test_direct_methods() {
        let state = CalculatorState::new()
            .enter_digit(digit(6))
            .choose_operator(Operator::Divide)
            .unwrap()
            .enter_digit(digit(4))
            .evaluate()
            .unwrap();
        assert_eq!(state.display(), "1.5");
    }

    // ===== Clear / sign / percent =====

    #[test]
    fn test_clear_resets_everything() {
        let state = run(&[d(7), Input::Operator(Operator::Multiply), d(8), Input::Clear]);
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_toggle_sign() {
        let state = run(&[d(5), Input::ToggleSign]);
        assert_eq!(state.display(), "-5");
        let state = run(&[d(5), Input::ToggleSign, Input::ToggleSign]);
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_toggle_sign_zero() {
        assert_eq!(run(&[Input::ToggleSign]).display(), "0");
    }

    #[test]
    fn test_toggle_sign_keeps_pending() {
        let state = run(&[d(5), Input::Operator(Operator::Add), Input::ToggleSign]);
        assert_eq!(state.display(), "-5");
        assert!(state.should_reset());
        assert_eq!(state.previous_value(), Some("5"));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(run(&[d(5), d(0), Input::Percent]).display(), "0.5");
        assert_eq!(run(&[d(5), Input::Percent]).display(), "0.05");
    }

    #[test]
    fn test_percentage_of_trailing_point() {
        assert_eq!(run(&[d(2), Input::DecimalPoint, Input::Percent]).display(), "0.02");
    }

    #[test]
    fn test_exponent_display_not_extended() {
        // 0.000001% = 1e-8
        let state = run(&[
            Input::DecimalPoint,
            d(0),
            d(0),
            d(0),
            d(0),
            d(0),
            d(1),
            Input::Percent,
        ]);
        assert_eq!(state.display(), "1e-8");
        assert!(!state.should_reset());
        assert_eq!(state.clone().enter_decimal_point().display(), "0.");
        assert_eq!(state.enter_digit(digit(3)).display(), "3");
    }

    #[test]
    fn test_input_display() {
        assert_eq!(d(3).to_string(), "3");
        assert_eq!(Input::Operator(Operator::Divide).to_string(), "÷");
        assert_eq!(Input::ToggleSign.to_string(), "±");
    }

    #[test]
    fn test_state_serializes() {
        let state = run(&[d(7), Input::Operator(Operator::Multiply)]);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"display\":\"7\""));
        assert!(json.contains("\"state\":\"pending_operator\""));
        assert!(json.contains("\"previous_value\":\"7\""));
    }
}
