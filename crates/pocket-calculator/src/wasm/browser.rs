//! Browser WASM bindings for the calculator widget
//!
//! The host page renders the buttons and forwards each click's element id
//! to [`BrowserCalculator::press`], then repaints from `display` and
//! `pending_line`.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::{Calculator, CalculatorConfig};
use crate::wasm::keypad::WasmKeypad;

/// Browser calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
    keypad: WasmKeypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::from_config(CalculatorConfig::default())
    }

    /// Creates a calculator from a JSON configuration string
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsError> {
        console_error_panic_hook::set_once();
        let config = CalculatorConfig::from_json(json)?;
        Ok(Self::from_config(config))
    }

    /// Handles a click on the button with the given element id and
    /// returns the new display text
    pub fn press(&mut self, button_id: &str) -> Result<String, JsError> {
        let action = self.keypad.handle_click(button_id)?;
        if let Err(err) = self.calculator.press(action.input()) {
            console::warn_1(&format!("calculator: {err}").into());
        }
        Ok(self.display())
    }

    /// Text for the display region
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display_text().to_string()
    }

    /// Secondary line, e.g. `"7 ×"`, or `undefined` when idle
    #[wasm_bindgen(getter, js_name = pendingLine)]
    pub fn pending_line(&self) -> Option<String> {
        self.calculator.pending_line()
    }

    /// Element ids of all keypad buttons in grid order
    #[wasm_bindgen(js_name = buttonIds)]
    pub fn button_ids(&self) -> Vec<String> {
        self.keypad.buttons().iter().map(|b| b.id.clone()).collect()
    }

    /// JSON snapshot of the state machine
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.calculator.state())?)
    }

    /// JSON array of completed calculations, oldest first
    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> Result<String, JsError> {
        Ok(self.calculator.history().to_json()?)
    }
}

impl BrowserCalculator {
    fn from_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            keypad: WasmKeypad::new(),
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"pocket-calculator WASM initialized".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_calculator_press() {
        let mut calc = BrowserCalculator::from_config(CalculatorConfig::default());
        for id in ["btn-7", "btn-times", "btn-8"] {
            calc.press(id).unwrap();
        }
        assert_eq!(calc.pending_line().as_deref(), Some("7 ×"));
        assert_eq!(calc.press("btn-equals").unwrap(), "56");
        assert_eq!(calc.pending_line(), None);
    }

    #[test]
    fn test_button_ids() {
        let calc = BrowserCalculator::from_config(CalculatorConfig::default());
        let ids = calc.button_ids();
        assert_eq!(ids.len(), 19);
        assert_eq!(ids[0], "btn-clear");
    }

    #[test]
    fn test_state_json() {
        let mut calc = BrowserCalculator::from_config(CalculatorConfig::default());
        calc.press("btn-4").unwrap();
        let json = calc.state_json().unwrap();
        assert!(json.contains("\"display\":\"4\""));
    }
}
