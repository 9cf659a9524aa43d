//! Pocket Calculator - keypad calculator widget
//!
//! A four-function calculator driven by button presses: digits, decimal
//! point, `+ - × ÷`, `=`, `C`, `±` and `%`. One operation can be pending at
//! a time; choosing another operator after entering the second operand
//! resolves the first, so `3 + 4 + 5 =` shows `12`.
//!
//! # Layers
//!
//! - [`core`]: the state machine ([`CalculatorState`](core::CalculatorState))
//!   and the stateful [`Calculator`](core::Calculator) wrapper
//! - [`wasm`]: keypad layout, mock DOM and the browser bindings
//! - [`driver`]: one behavioural specification run against every frontend
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.enter_keys("7×8=").unwrap();
//! assert_eq!(calc.display(), "56");
//!
//! // Division by zero yields 0 unless configured otherwise
//! calc.enter_keys("9÷0=").unwrap();
//! assert_eq!(calc.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::History;
    pub use crate::core::number::{format_number, parse_number};
    pub use crate::core::state::{Calculation, Phase};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorConfig, CalculatorState, Digit,
        DivisionByZeroPolicy, Input, Operator, PendingOperation,
    };
    pub use crate::driver::{CalculatorDriver, HistoryItem};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;

    pub use crate::wasm::{DomElement, DomEvent, KeypadAction, MockDom, WasmDriver, WasmKeypad};
}
