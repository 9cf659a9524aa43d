//! Unified calculator driver
//!
//! The behaviour of the widget is specified once, as `verify_*` functions
//! generic over [`CalculatorDriver`], and run against every frontend: the
//! bare [`Calculator`] and the mock-DOM [`WasmDriver`](crate::wasm::WasmDriver).

// `verify_*` functions are assertions: they panic on mismatch
#![allow(clippy::unwrap_used)]

use crate::core::{CalcError, CalcResult, Calculator, Digit, Input, Operator};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calculator::driver::{verify_basic_arithmetic, CalculatorDriver};
/// use pocket_calculator::wasm::WasmDriver;
///
/// let mut driver = WasmDriver::new();
/// driver.enter_keys("7×8=").unwrap();
/// assert_eq!(driver.display(), "56");
///
/// verify_basic_arithmetic(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Delivers one input event
    fn press(&mut self, input: Input) -> CalcResult<()>;

    /// Text shown in the display region
    fn display(&self) -> String;

    /// Secondary line, present while an operation is pending
    fn pending_line(&self) -> Option<String>;

    /// Completed calculations, newest first
    fn history(&self) -> Vec<HistoryItem>;

    /// Presses `C`
    fn clear(&mut self) {
        // clearing never fails
        let _ = self.press(Input::Clear);
    }

    /// Presses the buttons for a key string such as `"3+4+5="`
    fn enter_keys(&mut self, keys: &str) -> CalcResult<()> {
        for input in parse_keys(keys)? {
            self.press(input)?;
        }
        Ok(())
    }
}

/// A completed calculation as seen through a driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// `lhs op rhs`
    pub expression: String,
    /// Formatted result
    pub result: String,
}

/// Maps a key string to inputs, one button label per character.
///
/// Whitespace is skipped; `*` and `/` are accepted for `×` and `÷`.
pub fn parse_keys(keys: &str) -> CalcResult<Vec<Input>> {
    keys.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            '0'..='9' => Digit::try_from(ch).map(Input::Digit),
            '.' => Ok(Input::DecimalPoint),
            '=' => Ok(Input::Equals),
            'C' | 'c' => Ok(Input::Clear),
            '±' => Ok(Input::ToggleSign),
            '%' => Ok(Input::Percent),
            other => other
                .to_string()
                .parse::<Operator>()
                .map(Input::Operator)
                .map_err(|_| CalcError::UnknownButton(other.to_string())),
        })
        .collect()
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, input: Input) -> CalcResult<()> {
        Calculator::press(self, input)
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn pending_line(&self) -> Option<String> {
        Calculator::pending_line(self)
    }

    fn history(&self) -> Vec<HistoryItem> {
        Calculator::history(self)
            .iter_rev()
            .map(|c| HistoryItem {
                expression: c.expression(),
                result: c.result.clone(),
            })
            .collect()
    }
}

// ===== Unified specifications =====
// These work with ANY CalculatorDriver implementation

/// Digits concatenate; a lone leading zero is replaced
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("123").unwrap();
    assert_eq!(driver.display(), "123");
    driver.clear();

    driver.enter_keys("007").unwrap();
    assert_eq!(driver.display(), "7");
    driver.clear();
}

/// A second decimal point in the same number is ignored
pub fn verify_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("3..1.").unwrap();
    assert_eq!(driver.display(), "3.1");
    driver.clear();

    driver.enter_keys(".5").unwrap();
    assert_eq!(driver.display(), "0.5");
    driver.clear();
}

/// The four operators, including the division-by-zero fallback
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("7×8=", "56"),
        ("3+4=", "7"),
        ("9-14=", "-5"),
        ("6÷4=", "1.5"),
        ("9÷0=", "0"),
    ] {
        driver.clear();
        driver.enter_keys(keys).unwrap();
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
    driver.clear();
}

/// Choosing an operator with a second operand entered resolves the first
pub fn verify_chained_operators<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("3+").unwrap();
    assert_eq!(driver.pending_line().as_deref(), Some("3 +"));

    driver.enter_keys("4+").unwrap();
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.pending_line().as_deref(), Some("7 +"));

    driver.enter_keys("5=").unwrap();
    assert_eq!(driver.display(), "12");
    assert_eq!(driver.pending_line(), None);

    // operator replaced before a second operand
    driver.clear();
    driver.enter_keys("8×-2=").unwrap();
    assert_eq!(driver.display(), "6");
    driver.clear();
}

/// `±` negates, `%` divides by 100
pub fn verify_sign_and_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("5±").unwrap();
    assert_eq!(driver.display(), "-5");
    driver.enter_keys("±").unwrap();
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.enter_keys("50%").unwrap();
    assert_eq!(driver.display(), "0.5");
    driver.clear();
}

/// `C` returns to the initial state from anywhere
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.enter_keys("7×8").unwrap();
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.pending_line(), None);

    // next digit replaces the zero
    driver.enter_keys("4").unwrap();
    assert_eq!(driver.display(), "4");
    driver.clear();
}

/// Every completed calculation is recorded, newest first
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let before = driver.history().len();

    driver.enter_keys("1+1=").unwrap();
    driver.enter_keys("2×3=").unwrap();

    let history = driver.history();
    assert_eq!(history.len(), before + 2);
    assert_eq!(history[0].expression, "2 × 3");
    assert_eq!(history[0].result, "6");
    assert_eq!(history[1].expression, "1 + 1");
    driver.clear();
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_point(driver);
    verify_basic_arithmetic(driver);
    verify_chained_operators(driver);
    verify_sign_and_percent(driver);
    verify_clear(driver);
    verify_history(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        let inputs = parse_keys("7 × 8 =").unwrap();
        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs[1], Input::Operator(Operator::Multiply));
        assert_eq!(inputs[3], Input::Equals);
    }

    #[test]
    fn test_parse_keys_ascii_operators() {
        let inputs = parse_keys("6/2*3").unwrap();
        assert_eq!(inputs[1], Input::Operator(Operator::Divide));
        assert_eq!(inputs[3], Input::Operator(Operator::Multiply));
    }

    #[test]
    fn test_parse_keys_functions() {
        assert_eq!(
            parse_keys("C±%.").unwrap(),
            vec![
                Input::Clear,
                Input::ToggleSign,
                Input::Percent,
                Input::DecimalPoint
            ]
        );
    }

    #[test]
    fn test_parse_keys_unknown() {
        assert_eq!(
            parse_keys("2^3"),
            Err(CalcError::UnknownButton("^".into()))
        );
    }

    #[test]
    fn test_calculator_driver_history() {
        let mut calc = Calculator::new();
        calc.enter_keys("9-4=").unwrap();
        assert_eq!(
            CalculatorDriver::history(&calc),
            vec![HistoryItem {
                expression: "9 - 4".into(),
                result: "5".into(),
            }]
        );
    }

    // ===== Unified specification against the core calculator =====

    #[test]
    fn test_unified_digit_entry() {
        verify_digit_entry(&mut Calculator::new());
    }

    #[test]
    fn test_unified_decimal_point() {
        verify_decimal_point(&mut Calculator::new());
    }

    #[test]
    fn test_unified_basic_arithmetic() {
        verify_basic_arithmetic(&mut Calculator::new());
    }

    #[test]
    fn test_unified_chained_operators() {
        verify_chained_operators(&mut Calculator::new());
    }

    #[test]
    fn test_unified_sign_and_percent() {
        verify_sign_and_percent(&mut Calculator::new());
    }

    #[test]
    fn test_unified_clear() {
        verify_clear(&mut Calculator::new());
    }

    #[test]
    fn test_unified_history() {
        verify_history(&mut Calculator::new());
    }

    #[test]
    fn test_full_specification() {
        run_full_specification(&mut Calculator::new());
    }
}
